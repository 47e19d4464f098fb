//! Event handlers
//!
//! Routes inbound dispatch events to the tracking service and the command
//! dispatcher.

mod error;
mod router;

pub use error::{HandlerError, HandlerResult};
pub use router::EventRouter;
