//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use emote_common::AppError;
use emote_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Repository, cache, or platform failure
    Domain(DomainError),

    /// Interaction arrived outside of a server
    NotInServer,

    /// Validation error
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::NotInServer => write!(f, "This command can only be used in a server."),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the error only means "nothing was tracked"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_not_found())
    }

    /// Get the error code for logs
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::NotInServer => "NOT_IN_SERVER",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::NotInServer => AppError::Domain(DomainError::InvalidInput(
                "interaction outside of a server".to_string(),
            )),
            ServiceError::Validation(msg) => AppError::Domain(DomainError::InvalidInput(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
