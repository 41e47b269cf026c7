//! Card components for the balance summary and the year selector.

use maud::{Markup, html};

use crate::{
    aggregation::{Flow, Summary},
    endpoints,
    html::{EXPENSE_TEXT_STYLE, INCOME_TEXT_STYLE, format_currency},
};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md";

fn summary_card(id: &str, title: &str, amount: f64, amount_style: &str) -> Markup {
    html! {
        div id=(id) class=(CARD_STYLE)
        {
            h3 class="text-sm font-medium text-gray-700 dark:text-gray-300 mb-2" { (title) }
            span class=(format!("amount text-2xl font-bold {amount_style}"))
            {
                (format_currency(amount))
            }
        }
    }
}

/// Renders the current balance, total income and total expenses.
///
/// The balance is green when it is zero or positive and red otherwise.
pub(super) fn summary_cards_view(summary: &Summary) -> Markup {
    let balance_style = match Flow::of(summary.balance) {
        Flow::Income => INCOME_TEXT_STYLE,
        Flow::Expense => EXPENSE_TEXT_STYLE,
    };

    html! {
        section id="summary" class="w-full grid gap-4 md:grid-cols-3 mb-8"
        {
            (summary_card("balance-card", "Current Balance", summary.balance, balance_style))
            (summary_card("income-card", "Total Income", summary.income, INCOME_TEXT_STYLE))
            (summary_card("expenses-card", "Total Expenses", summary.expenses, EXPENSE_TEXT_STYLE))
        }
    }
}

/// Renders links for switching the chart between the years that have data.
pub(super) fn year_selector_view(years: &[i32], selected_year: i32) -> Markup {
    html! {
        nav id="year-selector" class="flex items-center gap-2 mb-4" aria-label="Year"
        {
            span class="text-sm text-gray-700 dark:text-gray-300" { "Year:" }

            @for &year in years {
                @if year == selected_year {
                    span
                        class="px-3 py-1 rounded bg-blue-600 text-white text-sm font-semibold"
                        aria-current="true"
                    {
                        (year)
                    }
                } @else {
                    a
                        href=(format!("{}?year={year}", endpoints::DASHBOARD_VIEW))
                        class="px-3 py-1 rounded bg-gray-100 dark:bg-gray-700 text-sm
                            text-gray-700 dark:text-gray-200 hover:bg-gray-200"
                    {
                        (year)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        aggregation::Summary,
        html::{EXPENSE_TEXT_STYLE, INCOME_TEXT_STYLE},
    };

    use super::{summary_cards_view, year_selector_view};

    fn balance_class(summary: &Summary) -> String {
        let html = Html::parse_fragment(&summary_cards_view(summary).into_string());
        let selector = Selector::parse("#balance-card .amount").unwrap();

        html.select(&selector)
            .next()
            .expect("No balance card found")
            .value()
            .attr("class")
            .unwrap_or_default()
            .to_owned()
    }

    #[test]
    fn positive_balance_is_green() {
        let summary = Summary {
            income: 10.0,
            expenses: 5.0,
            balance: 5.0,
        };

        assert!(balance_class(&summary).contains(INCOME_TEXT_STYLE));
    }

    #[test]
    fn negative_balance_is_red() {
        let summary = Summary {
            income: 5.0,
            expenses: 10.0,
            balance: -5.0,
        };

        assert!(balance_class(&summary).contains(EXPENSE_TEXT_STYLE));
    }

    #[test]
    fn selected_year_is_not_a_link() {
        let html = Html::parse_fragment(&year_selector_view(&[2025, 2024, 2023], 2024).into_string());
        let links: Vec<_> = html
            .select(&Selector::parse("#year-selector a").unwrap())
            .filter_map(|link| link.value().attr("href"))
            .collect();

        assert_eq!(links, vec!["/dashboard?year=2025", "/dashboard?year=2023"]);
    }
}
