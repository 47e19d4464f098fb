//! Shared fixtures for unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use emote_core::entities::{ItemUsage, LiveEmoji, UsageTouch};
use emote_core::traits::{LiveEmojiSource, RepoResult, UsageRepository};
use emote_core::{DomainError, ItemKind, Snowflake};
use emote_db::{connect_in_memory, SqliteUsageRepository};

use crate::services::{ServiceContext, ServiceContextBuilder};

pub const SERVER: Snowflake = Snowflake::new(10);

/// Live source returning a fixed list, or failing
#[derive(Default)]
pub struct StaticSource {
    pub emojis: Vec<LiveEmoji>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl StaticSource {
    pub fn with_ids(ids: &[i64]) -> Self {
        Self {
            emojis: ids
                .iter()
                .map(|&id| LiveEmoji {
                    id: Snowflake::new(id),
                    name: format!("e{id}"),
                    animated: false,
                })
                .collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl LiveEmojiSource for StaticSource {
    async fn list_live_emojis(&self, _server_id: Snowflake) -> RepoResult<Vec<LiveEmoji>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::ExternalService("platform unavailable".to_string()));
        }
        Ok(self.emojis.clone())
    }
}

/// Repository where every call fails
pub struct FailingRepo;

fn down() -> DomainError {
    DomainError::DatabaseError("store unavailable".to_string())
}

#[async_trait]
impl UsageRepository for FailingRepo {
    async fn touch(&self, _touch: &UsageTouch) -> RepoResult<()> {
        Err(down())
    }

    async fn untouch(
        &self,
        _kind: ItemKind,
        _server_id: Snowflake,
        _item_id: Snowflake,
        _at: DateTime<Utc>,
    ) -> RepoResult<()> {
        Err(down())
    }

    async fn reset_server(&self, _server_id: Snowflake) -> RepoResult<u64> {
        Err(down())
    }

    async fn count(&self, _kind: ItemKind, _server_id: Snowflake) -> RepoResult<i64> {
        Err(down())
    }

    async fn list(
        &self,
        _kind: ItemKind,
        _server_id: Snowflake,
        _offset: i64,
        _limit: i64,
    ) -> RepoResult<Vec<ItemUsage>> {
        Err(down())
    }

    async fn list_least_used(
        &self,
        _kind: ItemKind,
        _server_id: Snowflake,
        _allowed_ids: &[Snowflake],
        _limit: i64,
    ) -> RepoResult<Vec<ItemUsage>> {
        Err(down())
    }
}

pub async fn context_with_source(source: StaticSource) -> ServiceContext {
    let pool = connect_in_memory().await.expect("in-memory store");
    ServiceContextBuilder::new()
        .usage_repo(Arc::new(SqliteUsageRepository::new(pool)))
        .live_source(Arc::new(source))
        .build()
        .expect("context")
}

pub async fn context() -> ServiceContext {
    context_with_source(StaticSource::default()).await
}

pub fn failing_context() -> ServiceContext {
    ServiceContextBuilder::new()
        .usage_repo(Arc::new(FailingRepo))
        .live_source(Arc::new(StaticSource::with_ids(&[1, 2])))
        .build()
        .expect("context")
}

/// Record `uses` touches of one emoji
pub async fn seed_emoji(ctx: &ServiceContext, id: i64, uses: usize) {
    for _ in 0..uses {
        ctx.usage_repo()
            .touch(&UsageTouch::now(
                ItemKind::Emoji,
                SERVER,
                Snowflake::new(id),
                format!("e{id}"),
            ))
            .await
            .expect("touch");
    }
}

/// Record one touch of each sticker id
pub async fn seed_stickers(ctx: &ServiceContext, ids: impl IntoIterator<Item = i64>) {
    for id in ids {
        ctx.usage_repo()
            .touch(&UsageTouch::now(
                ItemKind::Sticker,
                SERVER,
                Snowflake::new(id),
                format!("s{id}"),
            ))
            .await
            .expect("touch");
    }
}
