//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in emote-core.

mod error;
mod usage;

pub use usage::SqliteUsageRepository;
