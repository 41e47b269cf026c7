//! JSON endpoints for creating, reading, updating and deleting transactions.

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use crate::{
    ApiError, AppState, Database, Error,
    database_id::TransactionId,
    timezone::local_timezone,
    transaction::{
        Transaction, TransactionInput, create_transaction, delete_transaction,
        get_all_transactions, get_transaction, update_transaction, validate,
    },
};

/// The state needed by the transaction API.
#[derive(Debug, Clone)]
pub struct TransactionApiState {
    /// The database holding the transactions.
    pub database: Database,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            database: state.database.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The body sent after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedMessage {
    message: &'static str,
}

/// List every transaction, most recent first.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionApiState>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = state
        .database
        .run(get_all_transactions)
        .await
        .inspect_err(|error| tracing::error!("could not fetch transactions: {error}"))?;

    Ok(Json(transactions))
}

/// Validate the request body and save it as a new transaction.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionApiState>,
    WithRejection(Json(input), _): WithRejection<Json<TransactionInput>, ApiError>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let local_timezone = local_timezone(&state.local_timezone)?;
    let builder = validate(&input, local_timezone).map_err(Error::Validation)?;

    let transaction = state
        .database
        .run(move |connection| create_transaction(builder, connection))
        .await
        .inspect_err(|error| tracing::error!("could not create transaction: {error}"))?;

    tracing::debug!("created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Get a single transaction by its ID.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionApiState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = state
        .database
        .run(move |connection| get_transaction(transaction_id, connection))
        .await?;

    Ok(Json(transaction))
}

/// Validate the request body and overwrite the transaction with it.
pub async fn update_transaction_endpoint(
    State(state): State<TransactionApiState>,
    Path(transaction_id): Path<TransactionId>,
    WithRejection(Json(input), _): WithRejection<Json<TransactionInput>, ApiError>,
) -> Result<Json<Transaction>, ApiError> {
    let local_timezone = local_timezone(&state.local_timezone)?;
    let builder = validate(&input, local_timezone).map_err(Error::Validation)?;

    let transaction = state
        .database
        .run(move |connection| update_transaction(transaction_id, builder, connection))
        .await
        .inspect_err(|error| {
            tracing::error!("could not update transaction {transaction_id}: {error}")
        })?;

    Ok(Json(transaction))
}

/// Delete a transaction by its ID.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionApiState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<DeletedMessage>, ApiError> {
    let rows_affected = state
        .database
        .run(move |connection| delete_transaction(transaction_id, connection))
        .await
        .inspect_err(|error| {
            tracing::error!("could not delete transaction {transaction_id}: {error}")
        })?;

    if rows_affected == 0 {
        return Err(Error::NotFound.into());
    }

    Ok(Json(DeletedMessage {
        message: "Transaction deleted successfully",
    }))
}
