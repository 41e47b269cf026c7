//! Loosely typed transaction records and the strict parsing rules that turn
//! their fields into numbers and dates.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Value, value::RawValue};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem,
    format_description::well_known::Rfc3339, macros::format_description,
};
use time_tz::Tz;

use crate::{aggregation::ResolvedEntry, timezone::local_date};

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// A transaction as sent by an API client, before any validation.
///
/// Only the fields that aggregation reads are kept; anything else in the
/// record (IDs, descriptions, timestamps) is ignored. Either field may be
/// missing or hold a value of the wrong type, in which case it is `None`.
/// The record itself must be a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionRecord {
    /// The amount, if it was a finite JSON number or numeric string.
    pub amount: Option<f64>,
    /// The date text, if the field was a JSON string.
    pub date: Option<String>,
}

impl<'de> Deserialize<'de> for TransactionRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Kept as raw JSON so a number outside the range of f64 only drops the
        // amount instead of failing the whole request.
        let fields = HashMap::<String, Box<RawValue>>::deserialize(deserializer)?;

        Ok(Self {
            amount: fields.get("amount").and_then(|raw| parse_raw_amount(raw)),
            date: fields
                .get("date")
                .and_then(|raw| serde_json::from_str::<String>(raw.get()).ok()),
        })
    }
}

impl TransactionRecord {
    /// Parse the record's date and pair it with the amount.
    ///
    /// Date-times are converted to `local_timezone` before taking the calendar
    /// date, so a record lands in the month it happened in locally.
    pub fn resolve(&self, local_timezone: &Tz) -> ResolvedEntry {
        ResolvedEntry {
            amount: self.amount,
            date: self
                .date
                .as_deref()
                .and_then(|text| parse_date(text, local_timezone)),
        }
    }
}

/// Read a finite amount from a JSON number or a numeric string.
///
/// Strings must consist of a single number, optionally surrounded by
/// whitespace: `"12abc"` and `""` are rejected rather than read as 12 or 0.
/// `NaN` and infinities are rejected, as are `null`, booleans, arrays and
/// objects.
pub fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|amount| amount.is_finite()),
        Value::String(text) => parse_amount_text(text),
        _ => None,
    }
}

/// Like [parse_amount], but reads the JSON text directly so that numbers too
/// large for an `f64` are rejected instead of failing to deserialize.
fn parse_raw_amount(raw: &RawValue) -> Option<f64> {
    let text = raw.get().trim();

    if let Ok(text) = serde_json::from_str::<String>(text) {
        return parse_amount_text(&text);
    }

    if text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        text.parse::<f64>().ok().filter(|amount| amount.is_finite())
    } else {
        None
    }
}

fn parse_amount_text(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Read a calendar date from `YYYY-MM-DD` or an RFC 3339 date-time.
pub fn parse_date(text: &str, local_timezone: &Tz) -> Option<Date> {
    let text = text.trim();

    if let Ok(date) = Date::parse(text, ISO_DATE) {
        return Some(date);
    }

    OffsetDateTime::parse(text, &Rfc3339)
        .ok()
        .map(|date_time| local_date(date_time, local_timezone))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use time::macros::date;
    use time_tz::{Tz, timezones};

    use super::{TransactionRecord, parse_amount, parse_date};

    fn utc() -> &'static Tz {
        timezones::get_by_name("Etc/UTC").unwrap()
    }

    #[test]
    fn parses_numbers_and_numeric_strings() {
        assert_eq!(parse_amount(&json!(100)), Some(100.0));
        assert_eq!(parse_amount(&json!(-12.75)), Some(-12.75));
        assert_eq!(parse_amount(&json!("42.5")), Some(42.5));
        assert_eq!(parse_amount(&json!("  -3 ")), Some(-3.0));
        assert_eq!(parse_amount(&json!("1e3")), Some(1000.0));
    }

    #[test]
    fn rejects_partial_and_empty_strings() {
        assert_eq!(parse_amount(&json!("abc")), None);
        assert_eq!(parse_amount(&json!("12abc")), None);
        assert_eq!(parse_amount(&json!("")), None);
        assert_eq!(parse_amount(&json!("   ")), None);
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(parse_amount(&json!("NaN")), None);
        assert_eq!(parse_amount(&json!("inf")), None);
        assert_eq!(parse_amount(&json!("-Infinity")), None);
    }

    #[test]
    fn rejects_other_json_types() {
        assert_eq!(parse_amount(&Value::Null), None);
        assert_eq!(parse_amount(&json!(true)), None);
        assert_eq!(parse_amount(&json!([1])), None);
        assert_eq!(parse_amount(&json!({"value": 1})), None);
    }

    #[test]
    fn parses_calendar_dates_and_date_times() {
        assert_eq!(
            parse_date("2024-03-15", utc()),
            Some(date!(2024 - 03 - 15))
        );
        assert_eq!(
            parse_date("2024-03-15T10:00:00.000Z", utc()),
            Some(date!(2024 - 03 - 15))
        );
        assert_eq!(
            parse_date("2024-03-15T22:00:00-05:00", utc()),
            Some(date!(2024 - 03 - 16))
        );
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_date("", utc()), None);
        assert_eq!(parse_date("yesterday", utc()), None);
        assert_eq!(parse_date("2024-02-30", utc()), None);
    }

    #[test]
    fn record_ignores_unknown_fields() {
        let record: TransactionRecord = serde_json::from_value(json!({
            "_id": "65f1c0ffee",
            "amount": "-9.99",
            "date": "2024-06-01",
            "description": "Streaming",
            "createdAt": "2024-06-01T08:00:00Z"
        }))
        .unwrap();

        let entry = record.resolve(utc());

        assert_eq!(entry.amount, Some(-9.99));
        assert_eq!(entry.date, Some(date!(2024 - 06 - 01)));
    }

    #[test]
    fn record_with_non_string_date_has_no_date() {
        let record: TransactionRecord =
            serde_json::from_value(json!({ "amount": 1, "date": 1718000000000_i64 })).unwrap();

        assert_eq!(record.resolve(utc()).date, None);
    }

    #[test]
    fn date_times_use_the_offset_in_effect_on_that_day() {
        let auckland = timezones::get_by_name("Pacific/Auckland").unwrap();

        assert_eq!(
            parse_date("2024-06-30T11:30:00Z", auckland),
            Some(date!(2024 - 06 - 30))
        );
        assert_eq!(
            parse_date("2024-01-31T11:30:00Z", auckland),
            Some(date!(2024 - 02 - 01))
        );
    }

    #[test]
    fn record_with_out_of_range_amount_keeps_its_date() {
        let record: TransactionRecord =
            serde_json::from_str(r#"{ "amount": 1e400, "date": "2024-01-01" }"#).unwrap();

        let entry = record.resolve(utc());

        assert_eq!(entry.amount, None);
        assert_eq!(entry.date, Some(date!(2024 - 01 - 01)));
    }

    #[test]
    fn record_reads_raw_numbers_and_numeric_strings() {
        let records: Vec<TransactionRecord> = serde_json::from_str(
            r#"[{ "amount": -12.5 }, { "amount": " 7 " }, { "amount": "1e400" }, { "amount": true }]"#,
        )
        .unwrap();

        let amounts: Vec<_> = records.iter().map(|record| record.amount).collect();

        assert_eq!(amounts, vec![Some(-12.5), Some(7.0), None, None]);
    }

    #[test]
    fn record_must_be_an_object() {
        assert!(serde_json::from_str::<TransactionRecord>(r#"[100, "2024-01-01"]"#).is_err());
        assert!(serde_json::from_str::<TransactionRecord>("100").is_err());
    }
}
