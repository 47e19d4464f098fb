//! Business logic services
//!
//! Services borrow a `ServiceContext` and orchestrate repository, cache, and
//! platform calls.

pub mod context;
pub mod error;
pub mod tracking;
pub mod usage;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use tracking::{RecordedUsage, TrackingService};
pub use usage::UsageService;
