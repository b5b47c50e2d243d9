//! Store Manager
//!
//! Holds only the database configuration. Every operation opens its own
//! connection, runs one statement, and closes the connection on return.

use rusqlite::Connection;
use tracing::{error, info};

use crate::db::{self, schema, Database, DatabaseConfig, DbResult, Record};

use super::{Operation, Outcome};

/// Store over a single SQLite file
pub struct Store {
    config: DatabaseConfig,
}

impl Store {
    /// Create a store and make sure the users table exists.
    ///
    /// A bootstrap failure is logged and otherwise ignored; later operations
    /// will fail the same way and report it themselves.
    pub fn new(config: DatabaseConfig) -> Self {
        let store = Self { config };

        match store.ensure_schema() {
            Ok(true) => info!(path = %store.config.path.display(), "created users table"),
            Ok(false) => {}
            Err(err) => error!(
                path = %store.config.path.display(),
                error = %err,
                "failed to initialise users table"
            ),
        }

        store
    }

    /// Create the users table if absent. Returns `true` when it was created.
    pub fn ensure_schema(&self) -> DbResult<bool> {
        self.with_conn(|conn| {
            let existed = schema::has_schema(conn)?;
            schema::init_schema(conn)?;
            Ok(!existed)
        })
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Insert a new record. Fails if the name is taken.
    pub fn create(&self, record: &Record) -> Outcome {
        let result = self.with_conn(|conn| db::create_record(conn, record));
        self.finish(Operation::Create, result, |()| Outcome::Created)
    }

    /// Delete by name. Succeeds even when no record matched.
    pub fn delete(&self, name: &str) -> Outcome {
        let result = self.with_conn(|conn| db::delete_record(conn, name));
        self.finish(Operation::Delete, result, |rows| Outcome::Deleted { rows })
    }

    /// Overwrite every field but the name. Succeeds even when no record
    /// matched, and never inserts.
    pub fn update(&self, record: &Record) -> Outcome {
        let result = self.with_conn(|conn| db::update_record(conn, record));
        self.finish(Operation::Update, result, |rows| Outcome::Updated { rows })
    }

    /// Run a fresh query and hand each record to `visit` as it is read
    pub fn list<F>(&self, visit: F) -> Outcome
    where
        F: FnMut(Record),
    {
        let result = self.with_conn(|conn| db::for_each_record(conn, visit));
        self.finish(Operation::List, result, |count| Outcome::Listed { count })
    }

    fn with_conn<T, F>(&self, f: F) -> DbResult<T>
    where
        F: FnOnce(&Connection) -> DbResult<T>,
    {
        let db = Database::open(&self.config)?;
        f(db.conn())
    }

    fn finish<T>(
        &self,
        op: Operation,
        result: DbResult<T>,
        on_success: impl FnOnce(T) -> Outcome,
    ) -> Outcome {
        match result {
            Ok(value) => {
                let outcome = on_success(value);
                match outcome.rows_affected() {
                    Some(0) => info!(op = op.as_str(), "statement matched no rows"),
                    Some(rows) => info!(op = op.as_str(), rows, "store operation succeeded"),
                    None => info!(op = op.as_str(), "store operation succeeded"),
                }
                outcome
            }
            Err(err) => {
                error!(
                    op = op.as_str(),
                    path = %self.config.path.display(),
                    error = %err,
                    "store operation failed"
                );
                Outcome::Failed { op, error: err }
            }
        }
    }
}
