//! Defines the route handlers for the page for editing a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;

use crate::{
    Error,
    database_id::TransactionId,
    endpoints::{self, format_endpoint},
    timezone::local_timezone,
    transaction::{
        TransactionInput,
        form::{FormPage, TransactionForm, TransactionFormState, transaction_form_view},
        get_transaction, update_transaction, validate,
    },
};

fn edit_transaction_page(action: &str) -> FormPage<'_> {
    FormPage {
        title: "Edit Transaction",
        active_endpoint: endpoints::EDIT_TRANSACTION_VIEW,
        action,
        submit_label: "Update Transaction",
    }
}

/// Renders the page for editing a transaction.
pub async fn get_edit_transaction_page(
    State(state): State<TransactionFormState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let transaction = state
        .database
        .run(move |connection| get_transaction(transaction_id, connection))
        .await
        .inspect_err(|error| {
            tracing::error!("could not retrieve transaction {transaction_id}: {error}")
        })?;

    let action = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction_id);
    let values = TransactionForm::from_transaction(&transaction);

    Ok(transaction_form_view(&edit_transaction_page(&action), &values, &[]).into_response())
}

/// Update a transaction from the submitted form.
///
/// Redirects to the transactions page on success, otherwise shows the form
/// again with a message next to each invalid field.
pub async fn update_transaction_form_endpoint(
    State(state): State<TransactionFormState>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    let local_timezone = local_timezone(&state.local_timezone)?;

    let builder = match validate(&TransactionInput::from(form.clone()), local_timezone) {
        Ok(builder) => builder,
        Err(errors) => {
            tracing::debug!("rejected update to transaction {transaction_id}: {errors:?}");
            let action = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction_id);
            return Ok((
                StatusCode::BAD_REQUEST,
                transaction_form_view(&edit_transaction_page(&action), &form, &errors),
            )
                .into_response());
        }
    };

    state
        .database
        .run(move |connection| update_transaction(transaction_id, builder, connection))
        .await
        .inspect_err(|error| {
            tracing::error!("could not update transaction {transaction_id}: {error}")
        })?;

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}
