//! User Database - console user directory
//!
//! An interactive menu over a single SQLite table of user profiles.

use std::io;

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod app;
mod db;
mod store;

use app::{App, AppConfig};
use store::Store;

fn main() -> Result<()> {
    // Optional database path as the first argument
    let config = AppConfig::from_args(std::env::args().skip(1));

    // Logs share stderr with failure messages
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = Store::new(config.database_config());
    info!(path = %store.config().path.display(), "store ready");

    let stdin = io::stdin();
    let mut app = App::new(store, stdin.lock(), io::stdout(), io::stderr());
    app.run()?;

    Ok(())
}
