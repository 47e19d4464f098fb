//! Domain entities - core business objects

mod emoji;
mod usage;

pub use emoji::{EmojiRef, LiveEmoji, StickerRef};
pub use usage::{ItemUsage, UsageTouch};
