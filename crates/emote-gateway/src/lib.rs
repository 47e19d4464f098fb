//! # emote-gateway
//!
//! Consumes platform dispatch events, updates usage counters, and answers
//! interactions.

pub mod handlers;
pub mod platform;
pub mod protocol;
pub mod server;

pub use handlers::EventRouter;
pub use platform::RestLiveEmojiSource;
pub use server::{build_router, run, run_feed, FeedStats};
