//! Counter store schema
//!
//! Two tables of identical shape, one per item kind. Every statement is
//! idempotent so bootstrapping runs on every start.

use sqlx::SqlitePool;
use tracing::debug;

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS emojis (
    server_id   INTEGER NOT NULL,
    emote_id    INTEGER NOT NULL,
    emote_name  TEXT NOT NULL,
    usage_count INTEGER NOT NULL DEFAULT 1,
    first_used  DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
    last_used   DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
    PRIMARY KEY (server_id, emote_id)
);

CREATE TABLE IF NOT EXISTS stickers (
    server_id    INTEGER NOT NULL,
    sticker_id   INTEGER NOT NULL,
    sticker_name TEXT NOT NULL,
    usage_count  INTEGER NOT NULL DEFAULT 1,
    first_used   DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
    last_used    DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
    PRIMARY KEY (server_id, sticker_id)
);

CREATE INDEX IF NOT EXISTS idx_emojis_server_id_emote_id_usage_count
    ON emojis (server_id, emote_id, usage_count);

CREATE INDEX IF NOT EXISTS idx_stickers_server_id_sticker_id_usage_count
    ON stickers (server_id, sticker_id, usage_count);
"#;

/// Create tables and indexes if they do not exist yet
pub async fn bootstrap_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    debug!("Counter store schema ready");
    Ok(())
}
