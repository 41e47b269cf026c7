use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    Error,
    database_id::TransactionId,
    endpoints,
    transaction::{delete_transaction, transactions_page::TransactionsViewState},
};

/// A route handler for the delete button on the transactions page.
///
/// Redirects back to the transactions page, or shows the 404 page if the
/// transaction has already been deleted.
pub async fn delete_transaction_form_endpoint(
    State(state): State<TransactionsViewState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let rows_affected = state
        .database
        .run(move |connection| delete_transaction(transaction_id, connection))
        .await
        .inspect_err(|error| {
            tracing::error!("could not delete transaction {transaction_id}: {error}")
        })?;

    if rows_affected == 0 {
        tracing::debug!("transaction {transaction_id} was already deleted");
        return Err(Error::NotFound);
    }

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        endpoints::{self, format_endpoint},
        test_utils::{assert_redirect, get_test_server, parse_html, seed_transactions, select_text},
    };

    #[tokio::test]
    async fn deletes_and_redirects() {
        let database = seed_transactions(&[
            (-20.0, date!(2025 - 01 - 02), "Groceries"),
            (-5.0, date!(2025 - 01 - 03), "Bus"),
        ])
        .await;
        let server = get_test_server(database);

        let response = server
            .post(&format_endpoint(endpoints::DELETE_TRANSACTION_VIEW, 1))
            .await;

        assert_redirect(&response, endpoints::TRANSACTIONS_VIEW);
        let listing = parse_html(&server.get(endpoints::TRANSACTIONS_VIEW).await.text());
        assert_eq!(select_text(&listing, "td.description"), vec!["Bus"]);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let database = seed_transactions(&[(-20.0, date!(2025 - 01 - 02), "Groceries")]).await;
        let server = get_test_server(database);
        let path = format_endpoint(endpoints::DELETE_TRANSACTION_VIEW, 1);

        server.post(&path).await;
        let response = server.post(&path).await;

        response.assert_status_not_found();
    }
}
