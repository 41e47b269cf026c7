//! Reduces a set of transactions to total income, total expenses and the net
//! balance.

use serde::Serialize;

use crate::aggregation::{Entry, Flow};

/// Totals over a set of transactions.
///
/// `expenses` is a magnitude (never negative) and `balance` is the algebraic
/// sum of every valid amount, so `balance == income - expenses` up to
/// floating-point rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    /// The sum of all non-negative amounts.
    pub income: f64,
    /// The sum of the absolute values of all negative amounts.
    pub expenses: f64,
    /// Income minus expenses.
    pub balance: f64,
}

/// Sum the income, expenses and balance of `entries`.
///
/// Entries without a finite amount are skipped and do not affect any total.
/// The result does not depend on the order of `entries`.
pub fn summarize<E: Entry>(entries: &[E]) -> Summary {
    entries
        .iter()
        .filter_map(|entry| entry.amount())
        .fold(Summary::default(), |mut summary, amount| {
            match Flow::of(amount) {
                Flow::Income => summary.income += amount,
                Flow::Expense => summary.expenses += amount.abs(),
            }

            summary.balance += amount;
            summary
        })
}

/// Count the entries that [summarize] skips because their amount is invalid.
pub fn count_excluded<E: Entry>(entries: &[E]) -> usize {
    entries
        .iter()
        .filter(|entry| entry.amount().is_none())
        .count()
}
