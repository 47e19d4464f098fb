//! Error handling utilities for repositories

use emote_core::error::DomainError;
use emote_core::value_objects::{ItemKind, Snowflake};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "usage not found" error
pub fn usage_not_found(kind: ItemKind, server_id: Snowflake, item_id: Snowflake) -> DomainError {
    DomainError::UsageNotFound {
        kind,
        server_id,
        item_id,
    }
}
