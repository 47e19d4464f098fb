//! Emoji and sticker references

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// A custom emoji referenced inline in message text (`<:name:id>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRef {
    pub name: String,
    pub id: Snowflake,
    /// Set by the `a` flag; not relevant for counting
    pub animated: bool,
}

/// A sticker attached to a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerRef {
    pub id: Snowflake,
    pub name: String,
}

/// An emoji currently present in a server, as reported by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveEmoji {
    pub id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub animated: bool,
}
