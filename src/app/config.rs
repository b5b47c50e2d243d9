use std::path::PathBuf;

use crate::db::connection::DEFAULT_DB_FILE;
use crate::db::DatabaseConfig;

pub struct AppConfig {
    pub db_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

impl AppConfig {
    /// Build from command-line arguments (program name already skipped).
    /// The first argument, if any, is the database file.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        if let Some(path) = args.into_iter().next() {
            config.db_path = PathBuf::from(path);
        }
        config
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::with_path(&self.db_path)
    }
}
