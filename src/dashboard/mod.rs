//! Dashboard module
//!
//! Provides an overview page with the balance summary and a chart of
//! monthly income and expenses for a selectable year.

mod cards;
mod charts;
mod handlers;

pub use handlers::get_dashboard_page;
