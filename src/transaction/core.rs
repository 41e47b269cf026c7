//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{Error, aggregation::Entry, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction was first saved.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the transaction was last saved.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: f64, date: Date, description: &str) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date,
            description: description.to_owned(),
        }
    }
}

impl Entry for Transaction {
    fn amount(&self) -> Option<f64> {
        Some(self.amount).filter(|amount| amount.is_finite())
    }

    fn date(&self) -> Option<Date> {
        Some(self.date)
    }
}

/// The user-editable fields of a [Transaction].
///
/// Builders coming from user input should be produced by
/// [validate](crate::transaction::validate) so that the amount is finite and
/// the description is not blank.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The monetary amount of the transaction.
    ///
    /// Positive values represent income, negative values represent expenses.
    ///
    /// # Examples
    /// - `150.00` - Salary deposit
    /// - `-45.99` - Coffee shop purchase
    /// - `-1200.00` - Rent payment
    pub amount: f64,

    /// The date when the transaction occurred.
    pub date: Date,

    /// A human-readable description of the transaction.
    pub description: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

const SELECT_COLUMNS: &str = "id, amount, date, description, created_at, updated_at";

/// Create a new transaction in the database from a builder.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let now = OffsetDateTime::now_utc();

    let transaction = connection
        .prepare(&format!(
            "INSERT INTO \"transaction\" (amount, date, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             RETURNING {SELECT_COLUMNS}"
        ))?
        .query_row(
            params![builder.amount, builder.date, builder.description, now],
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM \"transaction\" WHERE id = :id"
        ))?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction, most recent date first.
///
/// Transactions on the same date are ordered by descending ID so that the
/// most recently added one comes first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM \"transaction\" ORDER BY date DESC, id DESC"
        ))?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Overwrite the amount, date and description of the transaction `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(&format!(
            "UPDATE \"transaction\"
             SET amount = ?1, date = ?2, description = ?3, updated_at = ?4
             WHERE id = ?5
             RETURNING {SELECT_COLUMNS}"
        ))?
        .query_row(
            params![
                builder.amount,
                builder.date,
                builder.description,
                OffsetDateTime::now_utc(),
                id
            ],
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// The number of rows changed by a query.
pub type RowsAffected = usize;

/// Delete the transaction `id`, returning the number of rows deleted.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM \"transaction\" WHERE id = :id",
            &[(":id", &id)],
        )
        .map_err(|err| err.into())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT INTO sqlite_sequence (name, seq)
         SELECT 'transaction', 0
         WHERE NOT EXISTS (SELECT 1 FROM sqlite_sequence WHERE name = 'transaction')",
        (),
    )?;

    // Used for listing transactions newest first.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        date: row.get(2)?,
        description: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
