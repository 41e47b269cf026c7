use axum_test::{TestResponse, TestServer};
use time::Date;

use crate::{AppState, Database, Transaction, build_router, create_transaction};

pub(crate) fn get_test_server(database: Database) -> TestServer {
    let state = AppState::new(database, "Etc/UTC");

    TestServer::try_new(build_router(state)).expect("could not create test server")
}

/// Create a database holding one transaction per `(amount, date, description)`.
pub(crate) async fn seed_transactions(transactions: &[(f64, Date, &str)]) -> Database {
    let database = Database::in_memory();
    database
        .run(|connection| {
            for &(amount, date, description) in transactions {
                create_transaction(Transaction::build(amount, date, description), connection)?;
            }
            Ok(())
        })
        .await
        .expect("could not seed test transactions");

    database
}

#[track_caller]
pub(crate) fn assert_redirect(response: &TestResponse, location: &str) {
    assert!(
        response.status_code().is_redirection(),
        "want a redirect, got status {}",
        response.status_code()
    );
    assert_eq!(response.header("location"), location);
}
