//! SQLite connection pool management

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use super::schema::bootstrap_schema;

/// Database configuration for connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
    /// How long a writer waits on a locked database
    pub busy_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite://emote_tracker.db?mode=rwc"),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

impl From<&emote_common::DatabaseConfig> for DatabaseConfig {
    fn from(config: &emote_common::DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections.max(1),
            min_connections: config.min_connections,
            ..Default::default()
        }
    }
}

/// Open a SQLite connection pool and make sure the schema exists
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(config.busy_timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect_with(options)
        .await?;

    bootstrap_schema(&pool).await?;
    info!(url = %config.url, "Counter store ready");

    Ok(pool)
}

/// Single-connection in-memory store with the schema applied
///
/// The connection is never recycled; closing it would drop the database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    bootstrap_schema(&pool).await?;
    Ok(pool)
}
