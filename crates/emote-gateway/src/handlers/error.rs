//! Handler error types

use emote_core::DomainError;
use emote_service::ServiceError;
use thiserror::Error;

/// Handler error type
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Service error
    #[error("Service error: {0}")]
    ServiceError(#[from] ServiceError),

    /// Domain error (from repositories)
    #[error("Domain error: {0}")]
    DomainError(#[from] DomainError),
}

impl HandlerError {
    /// Stable error code for logs
    pub fn code(&self) -> &str {
        match self {
            Self::ServiceError(e) => e.error_code(),
            Self::DomainError(e) => e.code(),
        }
    }
}

/// Handler result type
pub type HandlerResult<T> = Result<T, HandlerError>;
