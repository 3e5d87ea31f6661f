//! Read-only access to the SQLite store.
//!
//! A [`Store`] owns one connection for the duration of a report. The
//! connection is released by [`Store::close`], or by `Drop` on any path that
//! does not reach it.

use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use crate::error::StatsError;

/// Read-only handle on a match and delivery store.
///
/// # Example
///
/// ```ignore
/// let store = Store::open("odi_cricket.db")?;
/// let rows = catalog::team_win_statistics(&store)?;
/// store.close()?;
/// ```
pub struct Store {
    conn: Connection,
    location: String,
}

impl Store {
    /// Opens an existing SQLite store read-only.
    ///
    /// The file is never created. Opening probes the database header so
    /// that a file which is not a SQLite database is rejected here rather
    /// than by the first query.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::StoreUnavailable`] if the file does not exist,
    /// cannot be opened, or is not a database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StatsError> {
        let path = path.as_ref();
        let location = path.display().to_string();
        let unavailable = |source| StatsError::StoreUnavailable {
            path: location.clone(),
            source,
        };

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(unavailable)?;
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(unavailable)?;

        tracing::info!("Opened store {}", location);
        Ok(Self { conn, location })
    }

    /// Wraps an already open connection, e.g. an in-memory database.
    pub fn from_connection(conn: Connection) -> Self {
        let location = conn
            .path()
            .filter(|path| !path.is_empty())
            .unwrap_or(":memory:")
            .to_string();
        Self { conn, location }
    }

    /// Where the store was opened from.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Closes the connection.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::StoreClose`] if SQLite fails to close it.
    pub fn close(self) -> Result<(), StatsError> {
        let location = self.location;
        self.conn
            .close()
            .map_err(|(_, source)| StatsError::StoreClose {
                path: location.clone(),
                source,
            })?;
        tracing::info!("Closed store {}", location);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use std::io::Write;

    fn seeded_file() -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        let conn = Connection::open(file.path()).unwrap();
        schema::create_tables(&conn).unwrap();
        conn.execute(
            "INSERT INTO matches (match_id, team1, team2, gender, season, winner)
             VALUES (1, 'IND', 'AUS', 'male', 2019, 'IND')",
            [],
        )
        .unwrap();
        file
    }

    #[test]
    fn test_open_existing_store() {
        let file = seeded_file();
        let store = Store::open(file.path()).expect("store should open");

        let count: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(store.location(), file.path().display().to_string());
        store.close().unwrap();
    }

    #[test]
    fn test_open_missing_store_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.db");

        let result = Store::open(&path);

        match result {
            Err(StatsError::StoreUnavailable { path: reported, .. }) => {
                assert_eq!(reported, path.display().to_string());
            }
            other => panic!("Expected StoreUnavailable, got {:?}", other.err()),
        }
        assert!(!path.exists(), "opening must not create the file");
    }

    #[test]
    fn test_open_non_database_is_unavailable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'x'; 4096]).unwrap();
        file.flush().unwrap();

        let result = Store::open(file.path());
        assert!(matches!(result, Err(StatsError::StoreUnavailable { .. })));
    }

    #[test]
    fn test_store_is_read_only() {
        let file = seeded_file();
        let store = Store::open(file.path()).unwrap();

        let result = store.conn().execute(
            "INSERT INTO matches (match_id, team1, team2, gender, season)
             VALUES (2, 'ENG', 'NZ', 'male', 2019)",
            [],
        );
        assert!(result.is_err(), "writes must be rejected");
    }

    #[test]
    fn test_from_connection_in_memory() {
        let store = Store::from_connection(Connection::open_in_memory().unwrap());
        assert_eq!(store.location(), ":memory:");
    }
}
