//! Cricket statistics reports.
//!
//! This crate runs a fixed catalog of analytical queries against a SQLite
//! store of matches and ball-by-ball deliveries, and turns the results into
//! [`stats_table::Table`]s.
//!
//! # Modules
//!
//! - [`store`] - Read-only access to the SQLite store
//! - [`schema`] - DDL for the `matches` and `innings` relations
//! - [`catalog`] - The analytical queries and their row types
//! - [`report`] - Report selection by name
//! - [`config`] - Configuration file loading
//!
//! # Example
//!
//! ```ignore
//! use cricket_stats::{Report, Store};
//!
//! let store = Store::open("odi_cricket.db")?;
//! let table = Report::TeamWinStatistics.run(&store)?;
//! println!("{}", table);
//! ```

pub mod catalog;
pub mod config;
mod error;
pub mod report;
pub mod schema;
pub mod store;

pub use error::StatsError;
pub use report::Report;
pub use store::Store;
