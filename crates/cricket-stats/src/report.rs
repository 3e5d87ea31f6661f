//! Report selection.
//!
//! [`Report`] names the catalog operations so the command line, the catalog
//! and the renderer agree on one set of selectors.

use clap::ValueEnum;
use stats_table::{Row, Table};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::catalog::{self, GenderLeader, StrikeRateRecord, TeamWinRecord};
use crate::error::StatsError;
use crate::store::Store;

/// One of the catalog's analytical reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Report {
    /// Matches, wins and win percentage per team, gender and season
    #[value(name = "team_win_statistics")]
    TeamWinStatistics,
    /// Teams with the best 2019 win percentage for each gender
    #[value(name = "highest_win_percentage")]
    HighestWinPercentage,
    /// The four batters with the highest strike rate
    #[value(name = "highest_strike_rate")]
    HighestStrikeRate,
}

impl Report {
    /// All reports, in catalog order.
    pub const ALL: [Report; 3] = [
        Report::TeamWinStatistics,
        Report::HighestWinPercentage,
        Report::HighestStrikeRate,
    ];

    /// The selector used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Report::TeamWinStatistics => "team_win_statistics",
            Report::HighestWinPercentage => "highest_win_percentage",
            Report::HighestStrikeRate => "highest_strike_rate",
        }
    }

    /// Column headers of the rendered table.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Report::TeamWinStatistics => TeamWinRecord::HEADERS,
            Report::HighestWinPercentage => GenderLeader::HEADERS,
            Report::HighestStrikeRate => StrikeRateRecord::HEADERS,
        }
    }

    /// Runs the report against an open store.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::QueryExecution`] if the store rejects the query.
    pub fn run(self, store: &Store) -> Result<Table, StatsError> {
        tracing::info!("Running {} against {}", self, store.location());
        let table = match self {
            Report::TeamWinStatistics => Table::from_rows(&catalog::team_win_statistics(store)?)?,
            Report::HighestWinPercentage => {
                Table::from_rows(&catalog::highest_win_percentage(store)?)?
            }
            Report::HighestStrikeRate => Table::from_rows(&catalog::highest_strike_rate(store)?)?,
        };
        Ok(table)
    }

    /// Opens the store at `path`, runs the report and closes the store.
    ///
    /// The store is released on every path, including query failures.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::StoreUnavailable`] if the store cannot be opened,
    /// or [`StatsError::QueryExecution`] if the query fails.
    pub fn run_at<P: AsRef<Path>>(self, path: P) -> Result<Table, StatsError> {
        let store = Store::open(path)?;
        let table = self.run(&store)?;
        store.close()?;
        Ok(table)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Report {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Report::ALL
            .into_iter()
            .find(|report| report.name() == s)
            .ok_or_else(|| StatsError::UnknownReport {
                name: s.to_string(),
                expected: Report::ALL.map(Report::name).join(", "),
            })
    }
}
