// Pool creation and schema bootstrap for the SQLite store.

use crate::shell::config::Config;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// A pool of `max_connections` connections to a file database. Writers that find the database
/// locked wait up to `busy_timeout` for it instead of failing with SQLITE_BUSY; WAL keeps
/// readers off the writer's lock.
pub async fn connect(config: &Config) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(config.busy_timeout);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    migrate(&pool).await?;
    tracing::info!(
        database_url = %config.database_url,
        max_connections = config.max_connections,
        "database ready"
    );
    Ok(pool)
}

/// A private in-memory database. A single connection that never expires, because every
/// new SQLite memory connection would open an empty database of its own.
pub async fn connect_in_memory() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await?;
    migrate(&pool).await?;
    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!().run(pool).await?;
    Ok(())
}
