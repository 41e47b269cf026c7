//! Transaction management.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for storing, querying, and managing transactions
//! - Loosely typed `TransactionRecord`s and the parsing rules for their fields
//! - Validation of user input before it is written
//! - The JSON API and the HTML pages for listing, creating, editing and deleting

mod api;
mod core;
mod create_page;
mod delete_endpoint;
mod edit_page;
mod form;
mod record;
mod transactions_page;
mod validation;

pub use api::{
    create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
    list_transactions_endpoint, update_transaction_endpoint,
};
pub use core::{
    Transaction, TransactionBuilder, count_transactions, create_transaction,
    create_transaction_table, delete_transaction, get_all_transactions, get_transaction,
    update_transaction,
};
pub use create_page::{create_transaction_form_endpoint, get_new_transaction_page};
pub use delete_endpoint::delete_transaction_form_endpoint;
pub use edit_page::{get_edit_transaction_page, update_transaction_form_endpoint};
pub use record::TransactionRecord;
pub use transactions_page::get_transactions_page;
pub use validation::{FieldError, TransactionInput, validate};
