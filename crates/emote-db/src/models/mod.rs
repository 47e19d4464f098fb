//! Database models - SQLx-compatible structs for SQLite tables

mod usage;

pub use usage::UsageModel;
