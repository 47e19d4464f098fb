//! # emote-db
//!
//! Database layer implementing the counter store with SQLite via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - `SqliteUsageRepository`, the `UsageRepository` implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use emote_db::pool::{create_pool, DatabaseConfig};
//! use emote_db::SqliteUsageRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let usage_repo = SqliteUsageRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{bootstrap_schema, connect_in_memory, create_pool, DatabaseConfig, SqlitePool};
pub use repositories::SqliteUsageRepository;
