//! User-visible command replies

use emote_core::ItemKind;

pub const LIVE_LIST_FAILED: &str = "Failed to fetch guild emojis.";
pub const NO_LIVE_EMOJIS: &str = "No custom emojis found in this server.";
pub const LEAST_USED_FAILED: &str = "Failed to fetch usage data.";
pub const RESET_FAILED: &str = "Failed to reset counts.";
pub const RESET_DONE: &str = "✅ All emoji and sticker counts have been reset for this server.";

pub fn count_failed(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Emoji => "Failed to count emojis.",
        ItemKind::Sticker => "Failed to count stickers.",
    }
}

pub fn fetch_failed(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Emoji => "Failed to fetch emoji data.",
        ItemKind::Sticker => "Failed to fetch sticker data.",
    }
}
