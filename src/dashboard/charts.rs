//! Chart generation and rendering for the dashboard.
//!
//! The monthly chart is generated as JSON configuration for the ECharts
//! library and rendered with an HTML container and JavaScript initialization
//! code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip,
        Trigger,
    },
    series::Bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{
    aggregation::{MONTH_LABELS, MonthlyTotals},
    html::HeadElement,
};

const INCOME_COLOUR: &str = "#22c55e";
const EXPENSE_COLOUR: &str = "#ef4444";

/// The ECharts library, loaded from a CDN.
pub(super) const ECHARTS_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders an empty container for each chart, filled in by [charts_script].
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section id="charts" class="w-full mx-auto mb-4"
        {
            @for chart in charts {
                div id=(chart.id) class="min-h-[380px] rounded bg-white dark:bg-gray-100 shadow-md" {}
            }
        }
    )
}

/// Builds the script that draws each chart into its container once the page
/// has loaded.
///
/// Charts follow the browser's dark mode setting and resize with the window.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let options_by_id = charts
        .iter()
        .map(|chart| format!("[\"{}\", {}]", chart.id, chart.options))
        .collect::<Vec<_>>()
        .join(",\n");

    let script = format!(
        r#"document.addEventListener("DOMContentLoaded", () => {{
    const darkMode = window.matchMedia("(prefers-color-scheme: dark)");
    for (const [id, option] of [{options_by_id}]) {{
        const chart = echarts.init(document.getElementById(id));
        chart.setOption(option);
        window.addEventListener("resize", () => chart.resize());
        const applyTheme = () => chart.setTheme(darkMode.matches ? "dark" : "default");
        darkMode.addEventListener("change", applyTheme);
        applyTheme();
    }}
}});"#
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

/// A bar chart of income and expenses for each month of `year`.
pub(super) fn monthly_chart(months: &[MonthlyTotals; 12], year: i32) -> Chart {
    let income: Vec<f64> = months.iter().map(|month| month.income).collect();
    let expenses: Vec<f64> = months.iter().map(|month| month.expenses).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Monthly Expenses")
                .subtext(year.to_string()),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(80)
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(MONTH_LABELS.to_vec()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Expenses")
                .item_style(ItemStyle::new().color(EXPENSE_COLOUR))
                .data(expenses),
        )
        .series(
            Bar::new()
                .name("Income")
                .item_style(ItemStyle::new().color(INCOME_COLOUR))
                .data(income),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD',
              maximumFractionDigits: 0
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use std::array;

    use crate::aggregation::{MONTH_LABELS, MonthlyTotals};

    use maud::PreEscaped;

    use crate::html::HeadElement;

    use super::{DashboardChart, EXPENSE_COLOUR, INCOME_COLOUR, charts_script, monthly_chart};

    fn months() -> [MonthlyTotals; 12] {
        array::from_fn(|index| MonthlyTotals {
            month_index: index as u8,
            label: MONTH_LABELS[index],
            income: 0.0,
            expenses: 0.0,
        })
    }

    #[test]
    fn chart_has_income_and_expense_series() {
        let options = monthly_chart(&months(), 2024).to_string();

        assert!(options.contains("\"Income\""));
        assert!(options.contains("\"Expenses\""));
        assert!(options.contains(INCOME_COLOUR));
        assert!(options.contains(EXPENSE_COLOUR));
        assert!(options.contains("2024"));
    }

    #[test]
    fn chart_labels_every_month() {
        let options = monthly_chart(&months(), 2024).to_string();

        for label in MONTH_LABELS {
            assert!(options.contains(&format!("\"{label}\"")), "missing {label}");
        }
    }

    #[test]
    fn script_initializes_each_chart() {
        let charts = [DashboardChart {
            id: "monthly-chart",
            options: "{\"title\":{}}".to_owned(),
        }];

        let HeadElement::ScriptSource(PreEscaped(script)) = charts_script(&charts) else {
            panic!("want an inline script");
        };

        assert!(script.contains("[\"monthly-chart\", {\"title\":{}}]"));
        assert!(script.contains("echarts.init"));
    }
}
