//! Tracked item kinds
//!
//! Emoji and stickers are counted in two parallel tables with identical shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a tracked item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Custom server emoji
    Emoji,
    /// Server sticker
    Sticker,
}

impl ItemKind {
    /// Every kind, in a stable order
    pub const ALL: [ItemKind; 2] = [ItemKind::Emoji, ItemKind::Sticker];

    /// Get the string representation of the kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emoji => "emoji",
            Self::Sticker => "sticker",
        }
    }

    /// Prefix used in pagination interaction tokens
    #[must_use]
    pub const fn token_prefix(self) -> &'static str {
        match self {
            Self::Emoji => "emoji_page",
            Self::Sticker => "sticker_page",
        }
    }

    /// Resolve a kind from its interaction token prefix
    #[must_use]
    pub fn from_token_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "emoji_page" => Some(Self::Emoji),
            "sticker_page" => Some(Self::Sticker),
            _ => None,
        }
    }

    /// Rows shown per page when listing this kind
    #[must_use]
    pub const fn page_size(self) -> usize {
        match self {
            Self::Emoji => 25,
            Self::Sticker => 5,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
