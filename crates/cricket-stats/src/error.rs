//! Error type shared by the store, catalog and report layers.

use stats_table::TableError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The report selector did not name a known report.
    #[error("unknown report '{name}', expected one of: {expected}")]
    UnknownReport { name: String, expected: String },

    /// The store file is missing or is not a readable SQLite database.
    #[error("store unavailable at {path}: {source}")]
    StoreUnavailable {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// SQLite rejected a query, e.g. because a relation is missing.
    #[error("query failed: {0}")]
    QueryExecution(#[from] rusqlite::Error),

    /// SQLite reported an error while closing the store.
    #[error("failed to close store at {path}: {source}")]
    StoreClose {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to build table: {0}")]
    Table(#[from] TableError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
