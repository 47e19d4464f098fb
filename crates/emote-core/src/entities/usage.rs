//! Usage counter entity - one row per server, item, and kind

use chrono::{DateTime, Utc};

use crate::value_objects::{ItemKind, Snowflake};

/// Aggregate usage of one tracked item in one server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUsage {
    pub kind: ItemKind,
    pub server_id: Snowflake,
    pub item_id: Snowflake,
    /// Display name at the time of the last observation
    pub name: String,
    /// Never negative
    pub usage_count: i64,
    pub first_used: DateTime<Utc>,
    pub last_used: DateTime<Utc>,
}

impl ItemUsage {
    /// Unix timestamp (seconds) of the last touch
    #[inline]
    pub fn last_used_unix(&self) -> i64 {
        self.last_used.timestamp()
    }
}

/// A single observed usage of an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageTouch {
    pub kind: ItemKind,
    pub server_id: Snowflake,
    pub item_id: Snowflake,
    pub name: String,
    pub at: DateTime<Utc>,
}

impl UsageTouch {
    /// Create a touch observed now
    pub fn now(kind: ItemKind, server_id: Snowflake, item_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            kind,
            server_id,
            item_id,
            name: name.into(),
            at: Utc::now(),
        }
    }

    /// Override the observation time
    pub fn at(mut self, at: DateTime<Utc>) -> Self {
        self.at = at;
        self
    }
}
