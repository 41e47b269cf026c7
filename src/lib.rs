//! Fintrack is a small self-hosted web app for tracking personal income and
//! expenses.
//!
//! Transactions are stored in SQLite and exposed through a JSON API and a set
//! of server-rendered HTML pages. The [aggregation] module turns a snapshot of
//! transactions into the balance summary and the monthly series that the
//! dashboard charts.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

pub mod aggregation;
mod app_state;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod error_page;
mod html;
mod logging;
mod navigation;
mod reports;
mod routing;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use database_id::TransactionId;
pub use db::{Database, initialize as initialize_db};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::get_local_offset;
pub use transaction::{
    FieldError, Transaction, TransactionBuilder, TransactionRecord, create_transaction,
};

use crate::error_page::ErrorPage;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("could not listen for ctrl+c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The request body did not have the shape the endpoint expects, e.g.
    /// an object was sent where a list of transaction records was expected.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// One or more fields of a transaction failed validation.
    #[error("the transaction has {} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// The database file could not be opened or initialized.
    #[error("could not open the database: {0}")]
    DatabaseOpenError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::not_found().into_response(),
            Error::InvalidTimezoneError(timezone) => {
                ErrorPage::invalid_timezone(&timezone).into_response()
            }
            Error::DatabaseLockError => ErrorPage::internal_error().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::internal_error().into_response()
            }
        }
    }
}

/// The JSON body sent to API clients when a request fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

impl ErrorBody {
    fn new(error: &str) -> Self {
        Self {
            error: error.to_owned(),
            fields: Vec::new(),
        }
    }
}

impl Error {
    fn into_json_response(self) -> Response {
        let (status, body) = match self {
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("Transaction not found"),
            ),
            Error::InvalidInput(message) => (StatusCode::BAD_REQUEST, ErrorBody::new(&message)),
            Error::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Validation failed".to_owned(),
                    fields,
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(&format!(
                    "The server timezone \"{timezone}\" is not a valid, canonical timezone"
                )),
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("An unexpected error occurred, check the server logs"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Wraps [Error] for handlers that respond with JSON instead of HTML.
#[derive(Debug, PartialEq)]
pub(crate) struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected JSON body: {rejection}");
        Self(Error::InvalidInput(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("rejected query string: {rejection}");
        Self(Error::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.into_json_response()
    }
}
