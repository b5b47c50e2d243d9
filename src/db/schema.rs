//! Database Schema
//!
//! A single `users` table keyed by name.

use rusqlite::Connection;

use super::{DbError, DbResult};

/// Table holding one row per record
pub const USERS_TABLE: &str = "users";

/// Create the users table if it does not exist yet
pub fn init_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            name TEXT PRIMARY KEY,
            address TEXT,
            gender TEXT,
            favorite_movie TEXT,
            favorite_book TEXT
        );
        "#,
    )
    .map_err(DbError::Schema)
}

/// Check whether the users table exists
pub fn has_schema(conn: &Connection) -> DbResult<bool> {
    conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [USERS_TABLE],
        |row| row.get(0),
    )
    .map_err(DbError::Schema)
}
