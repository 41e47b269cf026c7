//! Defines the route handlers for the page for creating a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;

use crate::{
    Error, endpoints,
    timezone::{local_timezone, local_today},
    transaction::{
        TransactionInput, create_transaction,
        form::{FormPage, TransactionForm, TransactionFormState, transaction_form_view},
        validate,
    },
};

const NEW_TRANSACTION_PAGE: FormPage<'static> = FormPage {
    title: "New Transaction",
    active_endpoint: endpoints::NEW_TRANSACTION_VIEW,
    action: endpoints::NEW_TRANSACTION_VIEW,
    submit_label: "Create Transaction",
};

/// Renders the page for creating a transaction.
///
/// The date is prefilled with today's date in the local timezone.
pub async fn get_new_transaction_page(
    State(state): State<TransactionFormState>,
) -> Result<Response, Error> {
    let today = local_today(local_timezone(&state.local_timezone)?);
    let values = TransactionForm {
        date: today.to_string(),
        ..Default::default()
    };

    Ok(transaction_form_view(&NEW_TRANSACTION_PAGE, &values, &[]).into_response())
}

/// Create a transaction from the submitted form.
///
/// Redirects to the transactions page on success, otherwise shows the form
/// again with a message next to each invalid field.
pub async fn create_transaction_form_endpoint(
    State(state): State<TransactionFormState>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    let local_timezone = local_timezone(&state.local_timezone)?;

    let builder = match validate(&TransactionInput::from(form.clone()), local_timezone) {
        Ok(builder) => builder,
        Err(errors) => {
            tracing::debug!("rejected new transaction: {errors:?}");
            return Ok((
                StatusCode::BAD_REQUEST,
                transaction_form_view(&NEW_TRANSACTION_PAGE, &form, &errors),
            )
                .into_response());
        }
    };

    state
        .database
        .run(move |connection| create_transaction(builder, connection))
        .await
        .inspect_err(|error| tracing::error!("could not create transaction: {error}"))?;

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}
