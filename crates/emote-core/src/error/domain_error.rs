//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ItemKind, Snowflake};

/// Domain layer errors
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("No {kind} usage tracked for item {item_id} in server {server_id}")]
    UsageNotFound {
        kind: ItemKind,
        server_id: Snowflake,
        item_id: Snowflake,
    },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    /// Get an error code string for logs and responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UsageNotFound { .. } => "UNKNOWN_USAGE",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UsageNotFound { .. })
    }
}
