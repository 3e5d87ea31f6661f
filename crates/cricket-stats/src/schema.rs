//! Relations the catalog reads.
//!
//! The binary never writes to a store; this DDL exists so fixtures and
//! loaders can build a store the catalog understands.

use rusqlite::Connection;

/// One row per match.
///
/// `winner` is null for no-results and ties. `win_type` holds the decision
/// method; `'DLS'` marks a weather-adjusted result.
pub const MATCHES_DDL: &str = "
CREATE TABLE IF NOT EXISTS matches (
    match_id INTEGER PRIMARY KEY,
    team1 TEXT NOT NULL,
    team2 TEXT NOT NULL,
    gender TEXT NOT NULL,
    season INTEGER NOT NULL,
    winner TEXT,
    win_type TEXT
);
";

/// One row per delivery. `runs_batter` is null when the delivery is not
/// credited to the batter.
pub const INNINGS_DDL: &str = "
CREATE TABLE IF NOT EXISTS innings (
    match_id INTEGER NOT NULL REFERENCES matches (match_id),
    batter TEXT NOT NULL,
    runs_batter INTEGER
);
";

/// Creates both relations if they do not exist.
pub fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(MATCHES_DDL)?;
    conn.execute_batch(INNINGS_DDL)
}
