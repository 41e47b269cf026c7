//! Pure projections from a snapshot of transactions to the numbers shown on
//! the dashboard.
//!
//! Both aggregators read any type implementing [Entry], so they work the same
//! over validated [Transaction](crate::Transaction)s loaded from the database
//! and over loosely typed [TransactionRecord](crate::TransactionRecord)s sent
//! by API clients. An entry whose amount is missing or not a finite number
//! never reaches a sum, and an entry without a date never reaches a bucket.

mod series;
mod summary;

pub use series::{MONTH_LABELS, MonthlyTotals, available_years, monthly_series, select_year};
pub use summary::{Summary, count_excluded, summarize};

use time::Date;

/// The two fields of a transaction that aggregation reads.
pub trait Entry {
    /// The signed amount, or `None` if the amount is not a finite number.
    fn amount(&self) -> Option<f64>;

    /// The local calendar date, or `None` if the date could not be determined.
    fn date(&self) -> Option<Date>;
}

impl<E: Entry + ?Sized> Entry for &E {
    fn amount(&self) -> Option<f64> {
        (**self).amount()
    }

    fn date(&self) -> Option<Date> {
        (**self).date()
    }
}

/// Which way money moved in a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Money earned: the amount is zero or positive.
    Income,
    /// Money spent: the amount is negative.
    Expense,
}

impl Flow {
    /// Classify a signed amount.
    ///
    /// Zero counts as income. Callers must filter out non-finite amounts
    /// before classifying them.
    pub fn of(amount: f64) -> Self {
        if amount >= 0.0 {
            Flow::Income
        } else {
            Flow::Expense
        }
    }
}

/// An entry whose fields have already been resolved.
///
/// Produced by [TransactionRecord::resolve](crate::TransactionRecord::resolve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedEntry {
    /// The finite amount, if one could be parsed.
    pub amount: Option<f64>,
    /// The local calendar date, if one could be parsed.
    pub date: Option<Date>,
}

impl Entry for ResolvedEntry {
    fn amount(&self) -> Option<f64> {
        self.amount.filter(|amount| amount.is_finite())
    }

    fn date(&self) -> Option<Date> {
        self.date
    }
}
