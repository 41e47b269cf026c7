//! The page listing every transaction with links to edit or delete each one.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Database, Error,
    aggregation::Flow,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, EXPENSE_TEXT_STYLE, INCOME_TEXT_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency, link,
    },
    navigation::NavBar,
    transaction::{Transaction, get_all_transactions},
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The database holding the transactions.
    pub database: Database,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            database: state.database.clone(),
        }
    }
}

/// Render the list of transactions, most recent first.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
) -> Result<Response, Error> {
    let transactions = state
        .database
        .run(get_all_transactions)
        .await
        .inspect_err(|error| tracing::error!("could not fetch transactions: {error}"))?;

    Ok(transactions_view(&transactions).into_response())
}

fn amount_style(amount: f64) -> &'static str {
    match Flow::of(amount) {
        Flow::Income => INCOME_TEXT_STYLE,
        Flow::Expense => EXPENSE_TEXT_STYLE,
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
    let delete_url = format_endpoint(endpoints::DELETE_TRANSACTION_VIEW, transaction.id);

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(format!("date {TABLE_CELL_STYLE}")) { (transaction.date) }
            td class=(format!("description {TABLE_CELL_STYLE}")) { (transaction.description) }
            td class=(format!("amount text-right {TABLE_CELL_STYLE} {}", amount_style(transaction.amount)))
            {
                (format_currency(transaction.amount))
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    form
                        method="post"
                        action=(delete_url)
                        onsubmit="return confirm('Are you sure you want to delete this transaction?');"
                    {
                        button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                    }
                }
            }
        }
    }
}

fn transactions_view(transactions: &[Transaction]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "Add one");

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg"
            {
                div class="flex justify-between items-baseline mb-4"
                {
                    h2 class="text-xl font-bold" { "Transactions" }
                    (link(endpoints::NEW_TRANSACTION_VIEW, "New Transaction"))
                }

                @if transactions.is_empty() {
                    p id="no-transactions"
                    {
                        "No transactions yet. " (new_transaction_link) "."
                    }
                } @else {
                    div class="relative overflow-x-auto shadow-md rounded"
                    {
                        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                    th scope="col" class=(format!("text-right {TABLE_CELL_STYLE}")) { "Amount" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                                }
                            }

                            tbody
                            {
                                @for transaction in transactions {
                                    (transaction_row(transaction))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &[], &content)
}
