//! The application's database handle and schema set up.
//!
//! A [Database] is created once at start up and shared through the
//! application state. The SQLite connection itself is opened lazily on first
//! use; concurrent first callers wait on the same open attempt instead of
//! each opening their own connection.

use std::{
    fmt::Display,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use rusqlite::Connection;
use tokio::sync::OnceCell;

use crate::{Error, transaction::create_transaction_table};

/// Create the application tables if they do not already exist.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_transaction_table(connection)?;

    Ok(())
}

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    File(PathBuf),
    Memory,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::File(path) => write!(f, "{}", path.display()),
            Location::Memory => write!(f, ":memory:"),
        }
    }
}

/// A shared, lazily opened connection to the application database.
///
/// Cloning a `Database` is cheap and every clone refers to the same
/// connection.
#[derive(Debug, Clone)]
pub struct Database {
    location: Location,
    connection: Arc<OnceCell<Arc<Mutex<Connection>>>>,
}

impl Database {
    /// A database stored in the SQLite file at `path`.
    ///
    /// The file is created and initialized on first use.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Location::File(path.into()),
            connection: Arc::new(OnceCell::new()),
        }
    }

    /// A private in-memory database, mostly useful for tests.
    pub fn in_memory() -> Self {
        Self {
            location: Location::Memory,
            connection: Arc::new(OnceCell::new()),
        }
    }

    /// Wrap an already open connection.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn from_connection(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            location: Location::Memory,
            connection: Arc::new(OnceCell::from(Arc::new(Mutex::new(connection)))),
        })
    }

    /// Whether the connection has been opened yet.
    pub fn is_open(&self) -> bool {
        self.connection.initialized()
    }

    /// Get the shared connection, opening and initializing it if needed.
    ///
    /// Only one open attempt runs at a time. If it fails, the error is
    /// returned to every caller that was waiting on it and the next call
    /// tries again.
    ///
    /// # Errors
    /// Returns [Error::DatabaseOpenError] if the database could not be opened
    /// or initialized.
    pub async fn connection(&self) -> Result<Arc<Mutex<Connection>>, Error> {
        self.connection
            .get_or_try_init(|| async {
                let location = self.location.clone();
                tracing::info!("Opening database at {location}");

                let connection = tokio::task::spawn_blocking(move || open_database(&location))
                    .await
                    .map_err(|error| Error::DatabaseOpenError(error.to_string()))??;

                Ok::<_, Error>(Arc::new(Mutex::new(connection)))
            })
            .await
            .cloned()
    }

    /// Run `query` while holding the connection lock.
    ///
    /// # Errors
    /// Returns an error if the connection cannot be opened, the lock is
    /// poisoned, or `query` fails.
    pub async fn run<T, F>(&self, query: F) -> Result<T, Error>
    where
        F: FnOnce(&Connection) -> Result<T, Error> + Send,
    {
        let connection = self.connection().await?;
        let connection = connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        query(&connection)
    }
}

fn open_database(location: &Location) -> Result<Connection, Error> {
    let connection = match location {
        Location::File(path) => Connection::open(path),
        Location::Memory => Connection::open_in_memory(),
    }
    .map_err(|error| {
        tracing::error!("could not open database at {location}: {error}");
        Error::DatabaseOpenError(error.to_string())
    })?;

    initialize(&connection).map_err(|error| {
        tracing::error!("could not initialize database at {location}: {error}");
        Error::DatabaseOpenError(error.to_string())
    })?;

    Ok(connection)
}
