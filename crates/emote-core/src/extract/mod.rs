//! Usage extraction from message content
//!
//! Pure functions: no I/O, no clock.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::entities::{EmojiRef, StickerRef};
use crate::events::StickerItem;
use crate::value_objects::Snowflake;

static CUSTOM_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(a?):(\w+):(\d+)>").unwrap_or_else(|e| panic!("invalid emoji pattern: {e}"))
});

/// Find every custom emoji reference (`<:name:id>` or `<a:name:id>`) in text.
///
/// References come back in textual order; repeats are kept since each one
/// counts. Ids that overflow a signed 64-bit integer are skipped.
pub fn extract_emoji_references(text: &str) -> Vec<EmojiRef> {
    CUSTOM_EMOJI
        .captures_iter(text)
        .filter_map(|caps| {
            let raw_id = &caps[3];
            match Snowflake::parse(raw_id) {
                Ok(id) => Some(EmojiRef {
                    name: caps[2].to_string(),
                    id,
                    animated: !caps[1].is_empty(),
                }),
                Err(_) => {
                    warn!(raw_id, "Skipping emoji reference with unparseable id");
                    None
                }
            }
        })
        .collect()
}

/// Map a message's attached stickers to references
pub fn extract_sticker_references(items: &[StickerItem]) -> Vec<StickerRef> {
    items
        .iter()
        .map(|item| StickerRef {
            id: item.id,
            name: item.name.clone(),
        })
        .collect()
}
