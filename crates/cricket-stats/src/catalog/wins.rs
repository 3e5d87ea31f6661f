//! Team win statistics.
//!
//! Every match contributes one appearance per team. An appearance counts
//! only when the match has a winner and was not decided by the sentinel
//! method, so a qualifying match always adds exactly two appearances.

use rusqlite::params;
use stats_table::{Cell, Row};

use crate::error::StatsError;
use crate::store::Store;

/// Decision method whose results are left out of win statistics.
pub const SENTINEL_WIN_TYPE: &str = "DLS";

/// The season ranked by [`highest_win_percentage`].
pub const LEADERBOARD_SEASON: i64 = 2019;

const TEAM_WIN_STATISTICS_SQL: &str = "
SELECT
    team,
    gender,
    season,
    COUNT(*) AS total_matches,
    SUM(CASE WHEN winner = team THEN 1 ELSE 0 END) AS total_wins,
    ROUND(100.0 * SUM(CASE WHEN winner = team THEN 1 ELSE 0 END) / COUNT(*), 2) AS win_percentage
FROM (
    SELECT team1 AS team, gender, season, winner, win_type FROM matches
    UNION ALL
    SELECT team2 AS team, gender, season, winner, win_type FROM matches
) AS appearances
WHERE winner IS NOT NULL
  AND (win_type IS NULL OR win_type != ?1)
GROUP BY team, gender, season
ORDER BY gender, season, team
";

const HIGHEST_WIN_PERCENTAGE_SQL: &str = "
WITH win_stats AS (
    SELECT
        team,
        gender,
        ROUND(100.0 * SUM(CASE WHEN winner = team THEN 1 ELSE 0 END) / COUNT(*), 2) AS win_percentage
    FROM (
        SELECT team1 AS team, gender, season, winner, win_type FROM matches
        UNION ALL
        SELECT team2 AS team, gender, season, winner, win_type FROM matches
    ) AS appearances
    WHERE season = ?1
      AND winner IS NOT NULL
      AND (win_type IS NULL OR win_type != ?2)
    GROUP BY team, gender
)
SELECT team, gender, win_percentage
FROM win_stats
WHERE (gender, win_percentage) IN (
    SELECT gender, MAX(win_percentage)
    FROM win_stats
    GROUP BY gender
)
ORDER BY gender, team
";

/// Win record for one team in one gender category and season.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWinRecord {
    pub team: String,
    pub gender: String,
    pub season: i64,
    pub total_matches: i64,
    pub total_wins: i64,
    /// `100 * total_wins / total_matches`, rounded to two places.
    pub win_percentage: f64,
}

impl Row for TeamWinRecord {
    const HEADERS: &'static [&'static str] = &[
        "Team",
        "Gender",
        "Season",
        "Total Matches",
        "Total Wins",
        "Win Percentage",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.team.as_str().into(),
            self.gender.as_str().into(),
            self.season.into(),
            self.total_matches.into(),
            self.total_wins.into(),
            Cell::decimal(self.win_percentage, 2),
        ]
    }
}

/// A team holding the best win percentage for its gender category.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderLeader {
    pub team: String,
    pub gender: String,
    pub win_percentage: f64,
}

impl Row for GenderLeader {
    const HEADERS: &'static [&'static str] = &["Team", "Gender", "Win Percentage"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.team.as_str().into(),
            self.gender.as_str().into(),
            Cell::decimal(self.win_percentage, 2),
        ]
    }
}

/// Win statistics for every team, by gender and season.
///
/// Rows are ordered by gender, season and team name.
///
/// # Errors
///
/// Returns [`StatsError::QueryExecution`] if the store rejects the query.
pub fn team_win_statistics(store: &Store) -> Result<Vec<TeamWinRecord>, StatsError> {
    let mut stmt = store.conn().prepare(TEAM_WIN_STATISTICS_SQL)?;
    let records = stmt
        .query_map(params![SENTINEL_WIN_TYPE], |row| {
            Ok(TeamWinRecord {
                team: row.get(0)?,
                gender: row.get(1)?,
                season: row.get(2)?,
                total_matches: row.get(3)?,
                total_wins: row.get(4)?,
                win_percentage: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = records.len(), "team_win_statistics");
    Ok(records)
}

/// Teams with the highest win percentage per gender in
/// [`LEADERBOARD_SEASON`].
///
/// Every team tied at a gender's maximum is returned. Rows are ordered by
/// gender, then team.
///
/// # Errors
///
/// Returns [`StatsError::QueryExecution`] if the store rejects the query.
pub fn highest_win_percentage(store: &Store) -> Result<Vec<GenderLeader>, StatsError> {
    let mut stmt = store.conn().prepare(HIGHEST_WIN_PERCENTAGE_SQL)?;
    let leaders = stmt
        .query_map(params![LEADERBOARD_SEASON, SENTINEL_WIN_TYPE], |row| {
            Ok(GenderLeader {
                team: row.get(0)?,
                gender: row.get(1)?,
                win_percentage: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = leaders.len(), "highest_win_percentage");
    Ok(leaders)
}
