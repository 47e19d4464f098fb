//! Tracking service
//!
//! Turns observed messages and reactions into counter updates.

use chrono::Utc;
use emote_core::entities::UsageTouch;
use emote_core::events::StickerItem;
use emote_core::{extract_emoji_references, extract_sticker_references, ItemKind, Snowflake};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of recording one message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordedUsage {
    pub emojis: usize,
    pub stickers: usize,
    /// References whose store update failed
    pub failed: usize,
}

/// Tracking service
pub struct TrackingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TrackingService<'a> {
    /// Create a new TrackingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Count every emoji reference in `content` and every attached sticker.
    ///
    /// A failed update is logged and the remaining references are still
    /// recorded.
    #[instrument(skip(self, content, stickers), fields(len = content.len()))]
    pub async fn record_message(
        &self,
        server_id: Snowflake,
        content: &str,
        stickers: &[StickerItem],
    ) -> RecordedUsage {
        let mut recorded = RecordedUsage::default();

        for emoji in extract_emoji_references(content) {
            let touch = UsageTouch::now(ItemKind::Emoji, server_id, emoji.id, emoji.name);
            if self.touch(&touch).await {
                recorded.emojis += 1;
            } else {
                recorded.failed += 1;
            }
        }

        for sticker in extract_sticker_references(stickers) {
            let touch = UsageTouch::now(ItemKind::Sticker, server_id, sticker.id, sticker.name);
            if self.touch(&touch).await {
                recorded.stickers += 1;
            } else {
                recorded.failed += 1;
            }
        }

        if recorded != RecordedUsage::default() {
            debug!(
                emojis = recorded.emojis,
                stickers = recorded.stickers,
                failed = recorded.failed,
                "Message usage recorded"
            );
        }
        recorded
    }

    /// Count a custom emoji reaction
    #[instrument(skip(self))]
    pub async fn record_reaction_add(
        &self,
        server_id: Snowflake,
        emoji_id: Snowflake,
        name: &str,
    ) -> ServiceResult<()> {
        let touch = UsageTouch::now(ItemKind::Emoji, server_id, emoji_id, name);
        self.ctx.usage_repo().touch(&touch).await?;
        Ok(())
    }

    /// Undo a custom emoji reaction.
    ///
    /// Returns `false` when the emoji was never tracked in this server.
    #[instrument(skip(self))]
    pub async fn record_reaction_remove(
        &self,
        server_id: Snowflake,
        emoji_id: Snowflake,
    ) -> ServiceResult<bool> {
        match self
            .ctx
            .usage_repo()
            .untouch(ItemKind::Emoji, server_id, emoji_id, Utc::now())
            .await
        {
            Ok(()) => Ok(true),
            Err(e) if e.is_not_found() => {
                debug!("Reaction removed for an untracked emoji");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn touch(&self, touch: &UsageTouch) -> bool {
        match self.ctx.usage_repo().touch(touch).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    kind = %touch.kind,
                    item_id = %touch.item_id,
                    error = %e,
                    "Failed to record usage"
                );
                false
            }
        }
    }
}
