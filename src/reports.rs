//! JSON endpoints for the balance summary and the monthly series.
//!
//! The GET endpoints aggregate the stored transactions. The POST endpoints
//! aggregate a list of raw transaction records sent in the request body,
//! which lets clients reuse the aggregation rules over data kept elsewhere.

use axum::{
    Json,
    extract::{FromRef, Query, State},
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use time_tz::Tz;

use crate::{
    ApiError, AppState, Database, TransactionRecord,
    aggregation::{
        Entry, MonthlyTotals, ResolvedEntry, Summary, available_years, count_excluded,
        monthly_series, select_year, summarize,
    },
    timezone::{local_timezone, local_today},
    transaction::get_all_transactions,
};

/// The state needed by the report endpoints.
#[derive(Debug, Clone)]
pub struct ReportState {
    /// The database holding the transactions.
    pub database: Database,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for ReportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            database: state.database.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The balance summary plus the number of records left out of it.
#[derive(Debug, PartialEq, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    summary: Summary,
    /// How many records were skipped because their amount was not a number.
    excluded: usize,
}

impl SummaryResponse {
    fn new<E: Entry>(entries: &[E]) -> Self {
        Self {
            summary: summarize(entries),
            excluded: count_excluded(entries),
        }
    }
}

/// The query string accepted by the series endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SeriesQuery {
    year: Option<i32>,
}

/// The years with data and the monthly totals for one of them.
#[derive(Debug, PartialEq, Serialize)]
pub struct SeriesResponse {
    years: Vec<i32>,
    year: i32,
    months: [MonthlyTotals; 12],
}

impl SeriesResponse {
    fn new<E: Entry>(entries: &[E], requested_year: Option<i32>, local_timezone: &Tz) -> Self {
        let years = available_years(entries);
        let year = select_year(requested_year, &years, local_today(local_timezone).year());
        let months = monthly_series(entries, year);

        Self {
            years,
            year,
            months,
        }
    }
}

fn resolve_records(records: &[TransactionRecord], local_timezone: &Tz) -> Vec<ResolvedEntry> {
    records
        .iter()
        .map(|record| record.resolve(local_timezone))
        .collect()
}

/// Summarize the stored transactions.
pub async fn get_summary_endpoint(
    State(state): State<ReportState>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let transactions = state
        .database
        .run(get_all_transactions)
        .await
        .inspect_err(|error| tracing::error!("could not fetch transactions: {error}"))?;

    Ok(Json(SummaryResponse::new(&transactions)))
}

/// Summarize the transaction records in the request body.
pub async fn post_summary_endpoint(
    State(state): State<ReportState>,
    WithRejection(Json(records), _): WithRejection<Json<Vec<TransactionRecord>>, ApiError>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let local_timezone = local_timezone(&state.local_timezone)?;
    let entries = resolve_records(&records, local_timezone);

    Ok(Json(SummaryResponse::new(&entries)))
}

/// Get the monthly series of the stored transactions.
pub async fn get_series_endpoint(
    State(state): State<ReportState>,
    WithRejection(Query(query), _): WithRejection<Query<SeriesQuery>, ApiError>,
) -> Result<Json<SeriesResponse>, ApiError> {
    let local_timezone = local_timezone(&state.local_timezone)?;
    let transactions = state
        .database
        .run(get_all_transactions)
        .await
        .inspect_err(|error| tracing::error!("could not fetch transactions: {error}"))?;

    Ok(Json(SeriesResponse::new(
        &transactions,
        query.year,
        local_timezone,
    )))
}

/// Get the monthly series of the transaction records in the request body.
pub async fn post_series_endpoint(
    State(state): State<ReportState>,
    WithRejection(Query(query), _): WithRejection<Query<SeriesQuery>, ApiError>,
    WithRejection(Json(records), _): WithRejection<Json<Vec<TransactionRecord>>, ApiError>,
) -> Result<Json<SeriesResponse>, ApiError> {
    let local_timezone = local_timezone(&state.local_timezone)?;
    let entries = resolve_records(&records, local_timezone);

    Ok(Json(SeriesResponse::new(&entries, query.year, local_timezone)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use time::{OffsetDateTime, macros::date};

    use crate::{
        Database, endpoints,
        test_utils::{get_test_server, seed_transactions},
    };

    async fn seeded_database() -> Database {
        seed_transactions(&[
            (-50.0, date!(2024 - 03 - 15), "Shoes"),
            (200.0, date!(2024 - 03 - 20), "Pay"),
            (-30.0, date!(2024 - 07 - 01), "Dinner"),
            (10.0, date!(2023 - 01 - 05), "Refund"),
        ])
        .await
    }

    #[tokio::test]
    async fn summary_of_stored_transactions() {
        let server = get_test_server(seeded_database().await);

        let body = server.get(endpoints::SUMMARY_API).await.json::<Value>();

        assert_eq!(
            body,
            json!({ "income": 210.0, "expenses": 80.0, "balance": 130.0, "excluded": 0 })
        );
    }

    #[tokio::test]
    async fn summary_of_empty_database() {
        let server = get_test_server(Database::in_memory());

        let body = server.get(endpoints::SUMMARY_API).await.json::<Value>();

        assert_eq!(
            body,
            json!({ "income": 0.0, "expenses": 0.0, "balance": 0.0, "excluded": 0 })
        );
    }

    #[tokio::test]
    async fn summary_of_posted_records_skips_bad_amounts() {
        let server = get_test_server(Database::in_memory());

        let response = server
            .post(endpoints::SUMMARY_API)
            .json(&json!([
                { "amount": "abc", "date": "2024-01-01" },
                { "amount": 100 },
                { "amount": null },
                { "amount": "-25.5", "date": "not a date" },
            ]))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "income": 100.0, "expenses": 25.5, "balance": 74.5, "excluded": 2 })
        );
    }

    #[tokio::test]
    async fn summary_rejects_body_that_is_not_a_list() {
        let server = get_test_server(Database::in_memory());

        let object = server
            .post(endpoints::SUMMARY_API)
            .json(&json!({ "amount": 100 }))
            .await;
        let list_of_numbers = server.post(endpoints::SUMMARY_API).json(&json!([1, 2])).await;

        object.assert_status(StatusCode::BAD_REQUEST);
        list_of_numbers.assert_status(StatusCode::BAD_REQUEST);
        assert!(object.json::<Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn summary_rejects_records_that_are_not_objects() {
        let server = get_test_server(Database::in_memory());

        let response = server
            .post(endpoints::SUMMARY_API)
            .json(&json!([[100, "2024-01-01"], [-5]]))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn summary_excludes_amounts_too_large_for_a_number() {
        let server = get_test_server(Database::in_memory());

        let response = server
            .post(endpoints::SUMMARY_API)
            .text(r#"[{"amount": 1e400, "date": "2024-01-01"}, {"amount": 100}]"#)
            .content_type("application/json")
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "income": 100.0, "expenses": 0.0, "balance": 100.0, "excluded": 1 })
        );
    }

    #[tokio::test]
    async fn series_of_requested_year() {
        let server = get_test_server(seeded_database().await);

        let response = server
            .get(endpoints::SERIES_API)
            .add_query_param("year", 2024)
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["years"], json!([2024, 2023]));
        assert_eq!(body["year"], 2024);

        let months = body["months"].as_array().unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(
            months[2],
            json!({ "month_index": 2, "label": "Mar", "income": 200.0, "expenses": 50.0 })
        );
        assert_eq!(
            months[6],
            json!({ "month_index": 6, "label": "Jul", "income": 0.0, "expenses": 30.0 })
        );
        assert_eq!(months[0]["income"], 0.0);
    }

    #[tokio::test]
    async fn series_defaults_to_most_recent_year_with_data() {
        let server = get_test_server(seeded_database().await);
        let current_year = OffsetDateTime::now_utc().year();

        let body = server.get(endpoints::SERIES_API).await.json::<Value>();

        // The seeded data stops in 2024, so unless the clock says 2024 or
        // 2023 the most recent year with data is picked.
        let want = if current_year == 2023 { 2023 } else { 2024 };
        assert_eq!(body["year"], want);
    }

    #[tokio::test]
    async fn series_of_posted_records() {
        let server = get_test_server(Database::in_memory());

        let response = server
            .post(endpoints::SERIES_API)
            .add_query_param("year", 2025)
            .json(&json!([
                { "amount": 40, "date": "2025-02-10T12:00:00Z" },
                { "amount": -15, "date": "2025-02-11" },
                { "amount": 99, "date": "garbage" },
                { "amount": 5, "date": "2022-12-31" },
            ]))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["years"], json!([2025, 2022]));
        assert_eq!(body["months"][1]["income"], 40.0);
        assert_eq!(body["months"][1]["expenses"], 15.0);
    }

    #[tokio::test]
    async fn series_rejects_invalid_year() {
        let server = get_test_server(Database::in_memory());

        let response = server
            .get(endpoints::SERIES_API)
            .add_query_param("year", "twenty")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
