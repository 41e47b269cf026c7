//! Dashboard HTTP handlers and view rendering.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Database, Error,
    aggregation::{Summary, available_years, monthly_series, select_year, summarize},
    dashboard::{
        cards::{summary_cards_view, year_selector_view},
        charts::{DashboardChart, ECHARTS_SCRIPT, charts_script, charts_view, monthly_chart},
    },
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
    timezone::{local_timezone, local_today},
    transaction::{Transaction, get_all_transactions},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database holding the transactions.
    pub database: Database,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            database: state.database.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query string for the dashboard page.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// The year to chart. Defaults to the current year, or the most recent
    /// year with data if the current year has none.
    year: Option<i32>,
}

/// Display a page with the balance summary and the monthly chart.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let local_timezone = local_timezone(&state.local_timezone)?;
    let transactions = state
        .database
        .run(get_all_transactions)
        .await
        .inspect_err(|error| tracing::error!("could not fetch transactions: {error}"))?;

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    if transactions.is_empty() {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    }

    let current_year = local_today(local_timezone).year();
    Ok(dashboard_view(nav_bar, &transactions, query.year, current_year).into_response())
}

/// Renders the dashboard page when no transaction data exists.
fn dashboard_no_data_view(nav_bar: NavBar<'_>) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "adding a transaction");

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 id="no-data" class="text-xl font-bold"
            {
                "No transactions available"
            }

            p
            {
                "Your balance and charts will show up here. Get started by "
                (new_transaction_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

fn dashboard_view(
    nav_bar: NavBar<'_>,
    transactions: &[Transaction],
    requested_year: Option<i32>,
    current_year: i32,
) -> Markup {
    let summary: Summary = summarize(transactions);
    let years = available_years(transactions);
    let year = select_year(requested_year, &years, current_year);
    let months = monthly_series(transactions, year);

    let charts = [DashboardChart {
        id: "monthly-chart",
        options: monthly_chart(&months, year).to_string(),
    }];

    let nav_bar = nav_bar.into_html();
    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (summary_cards_view(&summary))
            (year_selector_view(&years, year))
            (charts_view(&charts))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        charts_script(&charts),
    ];

    base("Dashboard", &scripts, &content)
}
