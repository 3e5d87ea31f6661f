//! Batting strike rates.

use rusqlite::params;
use stats_table::{Cell, Row};

use crate::error::StatsError;
use crate::store::Store;

/// Number of batters reported by [`highest_strike_rate`].
pub const STRIKE_RATE_LIMIT: i64 = 4;

// The join only drops deliveries whose match is missing.
const HIGHEST_STRIKE_RATE_SQL: &str = "
SELECT
    innings.batter,
    SUM(innings.runs_batter) AS total_runs,
    COUNT(*) AS total_balls,
    ROUND(SUM(innings.runs_batter) * 100.0 / COUNT(*), 2) AS strike_rate
FROM innings
JOIN matches ON innings.match_id = matches.match_id
WHERE innings.runs_batter IS NOT NULL
GROUP BY innings.batter
HAVING COUNT(*) > 0
ORDER BY strike_rate DESC, innings.batter
LIMIT ?1
";

/// Career strike rate for one batter.
#[derive(Debug, Clone, PartialEq)]
pub struct StrikeRateRecord {
    pub batter: String,
    pub total_runs: i64,
    pub total_balls: i64,
    /// Runs per 100 balls, rounded to two places.
    pub strike_rate: f64,
}

impl Row for StrikeRateRecord {
    const HEADERS: &'static [&'static str] =
        &["Batter", "Total Runs", "Total Balls", "Strike Rate"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.batter.as_str().into(),
            self.total_runs.into(),
            self.total_balls.into(),
            Cell::decimal(self.strike_rate, 2),
        ]
    }
}

/// The batters with the highest strike rate, best first.
///
/// Only deliveries credited to the batter count as balls faced. At most
/// [`STRIKE_RATE_LIMIT`] rows are returned; ties at the cut-off are not
/// extended, and equal strike rates are ordered by batter name.
///
/// # Errors
///
/// Returns [`StatsError::QueryExecution`] if the store rejects the query.
pub fn highest_strike_rate(store: &Store) -> Result<Vec<StrikeRateRecord>, StatsError> {
    let mut stmt = store.conn().prepare(HIGHEST_STRIKE_RATE_SQL)?;
    let records = stmt
        .query_map(params![STRIKE_RATE_LIMIT], |row| {
            Ok(StrikeRateRecord {
                batter: row.get(0)?,
                total_runs: row.get(1)?,
                total_balls: row.get(2)?,
                strike_rate: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = records.len(), "highest_strike_rate");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{empty_store, insert_ball, insert_match, MatchRow};

    fn store_with_balls(balls: &[(&str, Option<i64>)]) -> Store {
        let store = empty_store();
        insert_match(&store, &MatchRow::new(1, "IND", "AUS", Some("IND")));
        for (batter, runs) in balls {
            insert_ball(&store, 1, batter, *runs);
        }
        store
    }

    #[test]
    fn test_top_four_in_descending_order() {
        let store = store_with_balls(&[
            ("Maxwell", Some(6)),
            ("Maxwell", Some(4)),
            ("Kohli", Some(1)),
            ("Kohli", Some(1)),
            ("Kohli", Some(1)),
            ("Kohli", None),
            ("Root", Some(0)),
            ("Root", Some(4)),
            ("Buttler", Some(3)),
            ("Williamson", Some(1)),
            ("Williamson", Some(0)),
            ("Williamson", Some(0)),
            ("Williamson", Some(0)),
        ]);

        let records = highest_strike_rate(&store).unwrap();

        let summary: Vec<(&str, i64, i64, f64)> = records
            .iter()
            .map(|r| (r.batter.as_str(), r.total_runs, r.total_balls, r.strike_rate))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Maxwell", 10, 2, 500.0),
                ("Buttler", 3, 1, 300.0),
                ("Root", 4, 2, 200.0),
                ("Kohli", 3, 3, 100.0),
            ]
        );
    }

    #[test]
    fn test_cut_is_strict_at_ties() {
        let store = store_with_balls(&[
            ("A", Some(1)),
            ("B", Some(1)),
            ("C", Some(1)),
            ("D", Some(1)),
            ("E", Some(1)),
        ]);

        let records = highest_strike_rate(&store).unwrap();

        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.strike_rate == 100.0));
        assert!(records.iter().all(|r| r.batter != "E"));
    }

    #[test]
    fn test_batter_without_credited_balls_is_excluded() {
        let store = store_with_balls(&[("Smith", None), ("Smith", None), ("Warner", Some(2))]);

        let records = highest_strike_rate(&store).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].batter, "Warner");
        assert!(records.iter().all(|r| r.total_balls > 0));
    }

    #[test]
    fn test_deliveries_without_a_match_are_dropped() {
        let store = store_with_balls(&[("Rohit", Some(1))]);
        // External stores need not enforce the innings -> matches reference.
        store
            .conn()
            .execute_batch("PRAGMA foreign_keys = OFF;")
            .unwrap();
        insert_ball(&store, 99, "Ghost", Some(6));

        let records = highest_strike_rate(&store).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].batter, "Rohit");
    }

    #[test]
    fn test_strike_rate_rounding() {
        let store = store_with_balls(&[("Babar", Some(1)), ("Babar", Some(1)), ("Babar", Some(0))]);

        let records = highest_strike_rate(&store).unwrap();

        assert_eq!(records[0].strike_rate, 66.67);
    }

    #[test]
    fn test_highest_strike_rate_empty_store() {
        let store = empty_store();
        assert!(highest_strike_rate(&store).unwrap().is_empty());
    }

    #[test]
    fn test_missing_innings_is_query_error() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(crate::schema::MATCHES_DDL).unwrap();
        let store = Store::from_connection(conn);

        let result = highest_strike_rate(&store);
        assert!(matches!(result, Err(StatsError::QueryExecution(_))));
    }

    #[test]
    fn test_strike_rate_record_cells() {
        let record = StrikeRateRecord {
            batter: "Maxwell".to_string(),
            total_runs: 10,
            total_balls: 2,
            strike_rate: 500.0,
        };

        let cells: Vec<String> = record.cells().iter().map(Cell::to_string).collect();
        assert_eq!(cells, vec!["Maxwell", "10", "2", "500.00"]);
    }
}
