//! # emote-core
//!
//! Domain layer containing usage entities, value objects, extraction,
//! inbound platform events, and repository traits.
//! This crate has zero dependencies on infrastructure (database, HTTP, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod extract;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{EmojiRef, ItemUsage, LiveEmoji, StickerRef, UsageTouch};
pub use error::DomainError;
pub use events::GatewayEvent;
pub use extract::{extract_emoji_references, extract_sticker_references};
pub use traits::{LiveEmojiSource, RepoResult, UsageRepository};
pub use value_objects::{ItemKind, Snowflake, SnowflakeParseError};
