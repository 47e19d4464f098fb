//! Integration test utilities for the emote tracker
//!
//! This crate provides helpers for driving the full event pipeline
//! (router, services, store, cache) against an in-memory store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
