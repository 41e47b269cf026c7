//! The HTML form shared by the new and edit transaction pages.

use axum::extract::FromRef;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    AppState, Database,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, base,
    },
    navigation::NavBar,
    transaction::{FieldError, Transaction, TransactionInput},
};

/// The state needed by the new and edit transaction pages.
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// The database holding the transactions.
    pub database: Database,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionFormState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            database: state.database.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The fields of a submitted transaction form, exactly as typed.
///
/// Kept as text so that a rejected submission can be shown back to the user
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

impl TransactionForm {
    /// Prefill the form with a stored transaction.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            amount: transaction.amount.to_string(),
            date: transaction.date.to_string(),
            description: transaction.description.clone(),
        }
    }
}

impl From<TransactionForm> for TransactionInput {
    fn from(form: TransactionForm) -> Self {
        let amount = if form.amount.trim().is_empty() {
            Value::Null
        } else {
            Value::String(form.amount)
        };

        Self {
            amount,
            date: Some(form.date),
            description: Some(form.description),
        }
    }
}

/// Where the form is submitted and how it is labelled.
pub struct FormPage<'a> {
    pub title: &'a str,
    pub active_endpoint: &'a str,
    pub action: &'a str,
    pub submit_label: &'a str,
}

fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|error| error.field == field)
        .map(|error| error.message)
}

fn field_error(field: &str, errors: &[FieldError]) -> Markup {
    html! {
        @if let Some(message) = error_for(errors, field) {
            p id=(format!("{field}-error")) class=(FORM_ERROR_STYLE) { (message) }
        }
    }
}

/// Render a full page with the transaction form.
pub fn transaction_form_view(
    page: &FormPage<'_>,
    values: &TransactionForm,
    errors: &[FieldError],
) -> Markup {
    let nav_bar = NavBar::new(page.active_endpoint).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                method="post"
                action=(page.action)
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { (page.title) }

                div
                {
                    label
                        for="amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Amount"
                    }

                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        placeholder="Negative for expenses, e.g. -45.99"
                        required
                        autofocus
                        value=(values.amount)
                        class=(FORM_TEXT_INPUT_STYLE);

                    (field_error("amount", errors))
                }

                div
                {
                    label
                        for="date"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Date"
                    }

                    input
                        name="date"
                        id="date"
                        type="date"
                        required
                        value=(values.date)
                        class=(FORM_TEXT_INPUT_STYLE);

                    (field_error("date", errors))
                }

                div
                {
                    label
                        for="description"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Description"
                    }

                    input
                        name="description"
                        id="description"
                        type="text"
                        placeholder="Description"
                        required
                        value=(values.description)
                        class=(FORM_TEXT_INPUT_STYLE);

                    (field_error("description", errors))
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    (page.submit_label)
                }
            }
        }
    };

    base(page.title, &[], &content)
}
