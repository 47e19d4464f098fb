//! Gateway dispatch payloads

use serde::{Deserialize, Serialize};

use super::interaction::InteractionPayload;
use crate::value_objects::Snowflake;

/// Every dispatch the tracker reacts to
///
/// Serialized as `{"t": "MESSAGE_CREATE", "d": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", content = "d", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayEvent {
    MessageCreate(MessagePayload),
    MessageReactionAdd(ReactionPayload),
    MessageReactionRemove(ReactionPayload),
    InteractionCreate(InteractionPayload),
}

impl GatewayEvent {
    /// Dispatch name as sent on the wire
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MessageCreate(_) => "MESSAGE_CREATE",
            Self::MessageReactionAdd(_) => "MESSAGE_REACTION_ADD",
            Self::MessageReactionRemove(_) => "MESSAGE_REACTION_REMOVE",
            Self::InteractionCreate(_) => "INTERACTION_CREATE",
        }
    }

    /// Server the event happened in, if any
    #[must_use]
    pub fn guild_id(&self) -> Option<Snowflake> {
        match self {
            Self::MessageCreate(m) => m.guild_id,
            Self::MessageReactionAdd(r) | Self::MessageReactionRemove(r) => r.guild_id,
            Self::InteractionCreate(i) => i.guild_id,
        }
    }
}

/// Message author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: Snowflake,
    #[serde(default)]
    pub bot: bool,
}

/// Sticker attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerItem {
    pub id: Snowflake,
    pub name: String,
}

/// A posted message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub id: Option<Snowflake>,
    /// Absent for direct messages
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    pub author: Author,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sticker_items: Vec<StickerItem>,
}

impl MessagePayload {
    #[inline]
    pub fn is_from_bot(&self) -> bool {
        self.author.bot
    }
}

/// Emoji used in a reaction
///
/// Unicode emoji carry only a name; custom emoji also carry an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEmoji {
    #[serde(default)]
    pub id: Option<Snowflake>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub animated: bool,
}

impl ReactionEmoji {
    /// Custom (server-specific) emoji have an id
    #[inline]
    pub fn is_custom(&self) -> bool {
        self.id.is_some_and(|id| !id.is_zero())
    }
}

/// A reaction added to or removed from a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionPayload {
    pub user_id: Snowflake,
    #[serde(default)]
    pub message_id: Option<Snowflake>,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    pub emoji: ReactionEmoji,
}
