//! Buckets transactions by calendar month for the monthly income/expense
//! chart.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::aggregation::{Entry, Flow};

/// Three-letter English month names, indexed from January = 0.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The income and expenses that fell within one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyTotals {
    /// The month, from January = 0 to December = 11.
    pub month_index: u8,
    /// The abbreviated month name, e.g. "Mar".
    pub label: &'static str,
    /// The sum of the month's non-negative amounts.
    pub income: f64,
    /// The sum of the absolute values of the month's negative amounts.
    pub expenses: f64,
}

impl MonthlyTotals {
    fn empty(month_index: usize) -> Self {
        Self {
            month_index: month_index as u8,
            label: MONTH_LABELS[month_index],
            income: 0.0,
            expenses: 0.0,
        }
    }
}

/// The distinct calendar years of the entries' dates, most recent first.
///
/// Entries without a date are ignored.
pub fn available_years<E: Entry>(entries: &[E]) -> Vec<i32> {
    let years: BTreeSet<i32> = entries
        .iter()
        .filter_map(|entry| entry.date())
        .map(|date| date.year())
        .collect();

    years.into_iter().rev().collect()
}

/// Sum income and expenses per month for the entries dated in `year`.
///
/// Always returns all twelve months in calendar order; months without any
/// entries are zero. Entries without a date or without a finite amount are
/// skipped.
pub fn monthly_series<E: Entry>(entries: &[E], year: i32) -> [MonthlyTotals; 12] {
    let mut months: [MonthlyTotals; 12] = std::array::from_fn(MonthlyTotals::empty);

    for entry in entries {
        let Some(date) = entry.date().filter(|date| date.year() == year) else {
            continue;
        };

        let Some(amount) = entry.amount() else {
            continue;
        };

        let bucket = &mut months[u8::from(date.month()) as usize - 1];

        match Flow::of(amount) {
            Flow::Income => bucket.income += amount,
            Flow::Expense => bucket.expenses += amount.abs(),
        }
    }

    months
}

/// Pick the year to chart.
///
/// An explicitly `requested` year always wins. Otherwise the current year is
/// used, unless there is data and none of it falls in the current year, in
/// which case the most recent year with data is used.
pub fn select_year(requested: Option<i32>, available_years: &[i32], current_year: i32) -> i32 {
    if let Some(year) = requested {
        return year;
    }

    match available_years.first() {
        Some(&most_recent) if !available_years.contains(&current_year) => most_recent,
        _ => current_year,
    }
}
