//! Database Connection Management
//!
//! Opens short-lived SQLite connections. Every store operation acquires its
//! own `Database` and the connection closes when it is dropped.

use std::path::PathBuf;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

use super::{DbError, DbResult};

/// Default database file, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "users.db";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file
    pub path: PathBuf,
    /// How long a statement waits on a locked file before failing
    pub busy_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_FILE),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

impl DatabaseConfig {
    /// Create config for a specific path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

/// A single open connection, scoped to one operation
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database file described by `config`
    pub fn open(config: &DatabaseConfig) -> DbResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(&config.path, flags).map_err(|source| {
            DbError::Open {
                path: config.path.clone(),
                source,
            }
        })?;

        conn.busy_timeout(config.busy_timeout)?;

        Ok(Self { conn })
    }

    /// Get reference to connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.db");
        let config = DatabaseConfig::with_path(&path);

        let db = Database::open(&config).unwrap();
        drop(db);

        assert!(path.exists());
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::with_path(dir.path().join("missing").join("users.db"));

        let err = Database::open(&config).err().unwrap();
        assert!(matches!(err, DbError::Open { .. }));
    }

    #[test]
    fn test_default_path() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, PathBuf::from("users.db"));
    }
}
