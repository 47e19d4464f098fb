//! Database connection pool management

mod schema;
mod sqlite;

pub use schema::{bootstrap_schema, SCHEMA};
pub use sqlite::{connect_in_memory, create_pool, DatabaseConfig};

// Re-export SqlitePool for convenience
pub use sqlx::sqlite::SqlitePool;
