//! # emote-cache
//!
//! Process-local caching layer.
//!
//! ## Features
//!
//! - **Live emoji list**: read-through TTL cache in front of the platform's
//!   per-server emoji listing
//!
//! ## Example
//!
//! ```ignore
//! use emote_cache::{LiveListCache, LiveListConfig};
//!
//! let cache = LiveListCache::new(LiveListConfig::default());
//! let emojis = cache.get(server_id, &source).await?;
//! ```

pub mod live_list;

pub use live_list::{LiveListCache, LiveListConfig};
