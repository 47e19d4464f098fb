//! Model to entity mappers
//!
//! Conversions between database models and domain entities (emote-core).

mod usage;

pub use usage::usage_from_model;
