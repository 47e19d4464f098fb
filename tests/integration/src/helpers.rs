//! Test helpers for integration tests
//!
//! Provides a tracker wired to an in-memory store and a scripted live emoji
//! source.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use emote_cache::{LiveListCache, LiveListConfig};
use emote_core::{
    DomainError, GatewayEvent, ItemKind, ItemUsage, LiveEmoji, LiveEmojiSource, RepoResult,
    Snowflake,
};
use emote_db::{connect_in_memory, SqliteUsageRepository};
use emote_gateway::EventRouter;
use emote_service::dto::ResponseData;
use emote_service::{InteractionResponse, ServiceContextBuilder};
use serde_json::Value;

/// Live emoji source whose listing can be changed between calls
#[derive(Default)]
pub struct ScriptedLiveSource {
    emojis: Mutex<Vec<LiveEmoji>>,
    fetches: AtomicUsize,
}

impl ScriptedLiveSource {
    /// Replace the listing returned by later fetches
    pub fn set(&self, emojis: &[(u64, &str)]) {
        let emojis = emojis
            .iter()
            .map(|&(id, name)| LiveEmoji {
                id: Snowflake::new(id as i64),
                name: name.to_string(),
                animated: false,
            })
            .collect();
        *self.emojis.lock().unwrap_or_else(|e| e.into_inner()) = emojis;
    }

    /// Number of fetches served
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LiveEmojiSource for ScriptedLiveSource {
    async fn list_live_emojis(&self, _server_id: Snowflake) -> RepoResult<Vec<LiveEmoji>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let emojis = self
            .emojis
            .lock()
            .map_err(|e| DomainError::ExternalService(e.to_string()))?
            .clone();
        Ok(emojis)
    }
}

/// Tracker instance backed by an in-memory store
pub struct TestTracker {
    pub router: EventRouter,
    pub live: Arc<ScriptedLiveSource>,
}

impl TestTracker {
    /// Start a tracker with the default cache settings
    pub async fn start() -> Result<Self> {
        Self::start_with_cache(LiveListConfig::default()).await
    }

    /// Start a tracker with custom cache settings
    pub async fn start_with_cache(cache: LiveListConfig) -> Result<Self> {
        let pool = connect_in_memory().await?;
        let live = Arc::new(ScriptedLiveSource::default());

        let ctx = ServiceContextBuilder::new()
            .usage_repo(Arc::new(SqliteUsageRepository::new(pool)))
            .live_source(live.clone())
            .live_cache(Arc::new(LiveListCache::new(cache)))
            .build()?;

        Ok(Self {
            router: EventRouter::new(ctx),
            live,
        })
    }

    /// Dispatch one event in wire form
    pub async fn send(&self, event: Value) -> Result<Option<InteractionResponse>> {
        let event: GatewayEvent = serde_json::from_value(event)?;
        Ok(self.router.dispatch(event).await)
    }

    /// Dispatch events in order, ignoring responses
    pub async fn send_all(&self, events: impl IntoIterator<Item = Value>) -> Result<()> {
        for event in events {
            self.send(event).await?;
        }
        Ok(())
    }

    /// Dispatch an interaction that must produce a response
    pub async fn respond(&self, event: Value) -> Result<InteractionResponse> {
        self.send(event)
            .await?
            .ok_or_else(|| anyhow::anyhow!("interaction produced no response"))
    }

    /// Stored counter for one item
    pub async fn usage(&self, kind: ItemKind, server: u64, item: u64) -> Result<Option<ItemUsage>> {
        let rows = self
            .router
            .context()
            .usage_repo()
            .list(kind, Snowflake::new(server as i64), 0, i64::MAX)
            .await?;
        Ok(rows
            .into_iter()
            .find(|row| row.item_id == Snowflake::new(item as i64)))
    }

    /// Stored count for one item, 0 when untracked
    pub async fn count_of(&self, kind: ItemKind, server: u64, item: u64) -> Result<i64> {
        Ok(self
            .usage(kind, server, item)
            .await?
            .map_or(0, |row| row.usage_count))
    }
}

/// Message body of a response, failing for modals
pub fn body(response: &InteractionResponse) -> Result<&ResponseData> {
    response
        .data()
        .ok_or_else(|| anyhow::anyhow!("expected a message response, got {response:?}"))
}
