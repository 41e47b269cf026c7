//! Implements a struct that holds the state of the REST server.

use crate::Database;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The lazily opened database connection.
    pub database: Database,
}

impl AppState {
    /// Create a new [AppState] backed by `database`.
    ///
    /// The database is not touched until the first request that needs it.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(database: Database, local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
            database,
        }
    }
}
