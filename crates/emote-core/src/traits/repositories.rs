//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{ItemUsage, LiveEmoji, UsageTouch};
use crate::error::DomainError;
use crate::value_objects::{ItemKind, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Usage Repository (counter store)
// ============================================================================

#[async_trait]
pub trait UsageRepository: Send + Sync {
    /// Record one usage: insert with count 1 or increment the existing row.
    /// The stored name is replaced by the touch's name.
    async fn touch(&self, touch: &UsageTouch) -> RepoResult<()>;

    /// Undo one usage. The count never drops below zero.
    ///
    /// Returns `DomainError::UsageNotFound` when no row exists.
    async fn untouch(
        &self,
        kind: ItemKind,
        server_id: Snowflake,
        item_id: Snowflake,
        at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Delete every counter of every kind for a server, atomically.
    /// Returns the number of rows removed.
    async fn reset_server(&self, server_id: Snowflake) -> RepoResult<u64>;

    /// Number of tracked items of a kind in a server
    async fn count(&self, kind: ItemKind, server_id: Snowflake) -> RepoResult<i64>;

    /// Most used first, ties broken by most recent use
    async fn list(
        &self,
        kind: ItemKind,
        server_id: Snowflake,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<ItemUsage>>;

    /// Least used first among `allowed_ids`, ties broken by oldest use
    async fn list_least_used(
        &self,
        kind: ItemKind,
        server_id: Snowflake,
        allowed_ids: &[Snowflake],
        limit: i64,
    ) -> RepoResult<Vec<ItemUsage>>;
}

// ============================================================================
// Live Emoji Source (platform)
// ============================================================================

#[async_trait]
pub trait LiveEmojiSource: Send + Sync {
    /// Emoji currently present in the server
    async fn list_live_emojis(&self, server_id: Snowflake) -> RepoResult<Vec<LiveEmoji>>;
}
