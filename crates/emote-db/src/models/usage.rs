//! Usage counter database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model shared by the `emojis` and `stickers` tables
///
/// Queries alias the per-table id and name columns to `item_id` / `item_name`.
#[derive(Debug, Clone, FromRow)]
pub struct UsageModel {
    pub server_id: i64,
    pub item_id: i64,
    pub item_name: String,
    pub usage_count: i64,
    pub first_used: DateTime<Utc>,
    pub last_used: DateTime<Utc>,
}
