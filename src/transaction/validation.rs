//! Checks user input before a transaction is written to the database.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time_tz::Tz;

use crate::{
    timezone::local_today,
    transaction::{
        TransactionBuilder,
        record::{parse_amount, parse_date},
    },
};

/// The fields a client sends to create or update a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// The signed amount, as a JSON number or numeric string.
    #[serde(default)]
    pub amount: Value,
    /// The date as `YYYY-MM-DD` or an RFC 3339 date-time. Defaults to today.
    #[serde(default)]
    pub date: Option<String>,
    /// What the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
}

/// A problem with one field of a [TransactionInput].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The name of the offending field.
    pub field: &'static str,
    /// A message suitable for showing next to the field.
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Check `input` and convert it into a [TransactionBuilder].
///
/// - The amount is required and must be a finite number.
/// - The description is required and is trimmed.
/// - The date defaults to today in `local_timezone` when missing or blank, and
///   must otherwise parse.
///
/// # Errors
/// Returns every field error found, in the order amount, date, description.
pub fn validate(
    input: &TransactionInput,
    local_timezone: &Tz,
) -> Result<TransactionBuilder, Vec<FieldError>> {
    let mut errors = Vec::new();

    let amount = match &input.amount {
        Value::Null => {
            errors.push(FieldError::new("amount", "Amount is required"));
            None
        }
        Value::String(text) if text.trim().is_empty() => {
            errors.push(FieldError::new("amount", "Amount is required"));
            None
        }
        value => {
            let amount = parse_amount(value);
            if amount.is_none() {
                errors.push(FieldError::new("amount", "Amount must be a number"));
            }
            amount
        }
    };

    let date = match input.date.as_deref().map(str::trim) {
        None | Some("") => Some(local_today(local_timezone)),
        Some(text) => {
            let date = parse_date(text, local_timezone);
            if date.is_none() {
                errors.push(FieldError::new(
                    "date",
                    "Date must be a valid date (YYYY-MM-DD)",
                ));
            }
            date
        }
    };

    let description = input
        .description
        .as_deref()
        .map(str::trim)
        .filter(|description| !description.is_empty());
    if description.is_none() {
        errors.push(FieldError::new("description", "Description is required"));
    }

    match (amount, date, description) {
        (Some(amount), Some(date), Some(description)) if errors.is_empty() => {
            Ok(TransactionBuilder {
                amount,
                date,
                description: description.to_owned(),
            })
        }
        _ => Err(errors),
    }
}
