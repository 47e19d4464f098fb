//! Usage query service
//!
//! Read side of the counters: paged listings, the least-used report, and
//! server resets.

use std::sync::Arc;

use emote_core::entities::{ItemUsage, LiveEmoji};
use emote_core::{ItemKind, Snowflake};
use tracing::{info, instrument};

use crate::pagination::{page_offset, total_pages};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Rows shown in the least-used report
pub const LEAST_USED_LIMIT: i64 = 25;

/// Usage query service
pub struct UsageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UsageService<'a> {
    /// Create a new UsageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Number of pages needed to list every tracked item of a kind (at least 1)
    #[instrument(skip(self))]
    pub async fn total_pages(&self, kind: ItemKind, server_id: Snowflake) -> ServiceResult<usize> {
        let rows = self.ctx.usage_repo().count(kind, server_id).await?;
        Ok(total_pages(rows, kind.page_size()))
    }

    /// Rows on one page, most used first
    #[instrument(skip(self))]
    pub async fn page(
        &self,
        kind: ItemKind,
        server_id: Snowflake,
        page: usize,
    ) -> ServiceResult<Vec<ItemUsage>> {
        let size = kind.page_size();
        let rows = self
            .ctx
            .usage_repo()
            .list(kind, server_id, page_offset(page, size), size as i64)
            .await?;
        Ok(rows)
    }

    /// Emoji currently present in the server, served from the live list cache
    #[instrument(skip(self))]
    pub async fn live_emojis(&self, server_id: Snowflake) -> ServiceResult<Arc<[LiveEmoji]>> {
        let emojis = self
            .ctx
            .live_cache()
            .get(server_id, self.ctx.live_source())
            .await?;
        Ok(emojis)
    }

    /// Least used tracked emoji among the given live emoji
    #[instrument(skip(self, live), fields(live = live.len()))]
    pub async fn least_used(
        &self,
        server_id: Snowflake,
        live: &[LiveEmoji],
    ) -> ServiceResult<Vec<ItemUsage>> {
        let ids: Vec<Snowflake> = live.iter().map(|e| e.id).collect();
        let rows = self
            .ctx
            .usage_repo()
            .list_least_used(ItemKind::Emoji, server_id, &ids, LEAST_USED_LIMIT)
            .await?;
        Ok(rows)
    }

    /// Delete every counter for a server
    #[instrument(skip(self))]
    pub async fn reset(&self, server_id: Snowflake) -> ServiceResult<u64> {
        let removed = self.ctx.usage_repo().reset_server(server_id).await?;
        info!(server_id = %server_id, removed, "Server counters reset");
        Ok(removed)
    }
}
