//! Configuration file loading.
//!
//! The only setting is the location of the SQLite store. It is read from
//! `cricket-stats.toml` in the current directory when that file exists, and
//! the `--db` command-line flag takes precedence over it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::StatsError;

/// Store location used when neither the config file nor the CLI names one.
pub const DEFAULT_DATABASE: &str = "odi_cricket.db";

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Resolved configuration for a report run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatsConfig {
    /// Path to the SQLite store.
    /// Defaults to `odi_cricket.db` if not specified.
    #[serde(default = "default_database")]
    pub database: PathBuf,
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE)
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
        }
    }
}

impl StatsConfig {
    /// Loads the configuration from the default location.
    ///
    /// If [`Self::config_path()`] does not exist, returns the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the configuration from an explicit path, which must exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the path to the configuration file.
    ///
    /// Currently returns `cricket-stats.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("cricket-stats.toml")
    }

    /// Resolves the configuration for a run.
    ///
    /// Reads `config_file` when given, which must then exist, and otherwise
    /// falls back to [`Self::load()`]. A `database` override wins over both.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Config`] if the config file cannot be read or parsed.
    pub fn resolve(
        config_file: Option<&Path>,
        database: Option<PathBuf>,
    ) -> Result<Self, StatsError> {
        let config = match config_file {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        Ok(config.with_database_override(database))
    }

    /// Replaces the store location when `database` is set.
    pub fn with_database_override(mut self, database: Option<PathBuf>) -> Self {
        if let Some(database) = database {
            self.database = database;
        }
        self
    }
}
