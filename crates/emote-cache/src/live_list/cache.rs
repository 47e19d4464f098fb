//! Read-through cache of each server's live emoji list.
//!
//! One async mutex guards the whole map for the full check, fetch, and store
//! sequence, so concurrent misses for any server are serialized and a server
//! is fetched at most once per expiry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use emote_core::entities::LiveEmoji;
use emote_core::error::DomainError;
use emote_core::traits::{LiveEmojiSource, RepoResult};
use emote_core::value_objects::Snowflake;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

/// Default entry lifetime (24 hours)
const DEFAULT_TTL: Duration = Duration::from_secs(86400);

/// Live list cache configuration
#[derive(Debug, Clone)]
pub struct LiveListConfig {
    /// How long a fetched list is served before refetching
    pub ttl: Duration,
    /// Upper bound on one fetch; `None` waits indefinitely
    pub fetch_timeout: Option<Duration>,
}

impl Default for LiveListConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            fetch_timeout: None,
        }
    }
}

impl From<&emote_common::CacheConfig> for LiveListConfig {
    fn from(config: &emote_common::CacheConfig) -> Self {
        Self {
            ttl: config.live_list_ttl(),
            fetch_timeout: config.live_list_fetch_timeout(),
        }
    }
}

#[derive(Debug)]
struct Entry {
    emojis: Arc<[LiveEmoji]>,
    expires_at: Instant,
}

/// Per-server live emoji list, refreshed on expiry
#[derive(Debug)]
pub struct LiveListCache {
    entries: Mutex<HashMap<Snowflake, Entry>>,
    config: LiveListConfig,
}

impl LiveListCache {
    /// Create an empty cache
    pub fn new(config: LiveListConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Get the live list for a server, fetching it from `source` when absent
    /// or expired.
    ///
    /// Fetch failures are returned as-is and leave the cache untouched.
    #[instrument(skip(self, source))]
    pub async fn get(
        &self,
        server_id: Snowflake,
        source: &dyn LiveEmojiSource,
    ) -> RepoResult<Arc<[LiveEmoji]>> {
        let mut entries = self.entries.lock().await;

        if let Some(entry) = entries.get(&server_id) {
            if Instant::now() < entry.expires_at {
                debug!(count = entry.emojis.len(), "Live list cache hit");
                return Ok(Arc::clone(&entry.emojis));
            }
        }

        let emojis: Arc<[LiveEmoji]> = self.fetch(server_id, source).await?.into();
        debug!(count = emojis.len(), "Live list refreshed");

        entries.insert(
            server_id,
            Entry {
                emojis: Arc::clone(&emojis),
                expires_at: Instant::now() + self.config.ttl,
            },
        );

        Ok(emojis)
    }

    async fn fetch(
        &self,
        server_id: Snowflake,
        source: &dyn LiveEmojiSource,
    ) -> RepoResult<Vec<LiveEmoji>> {
        let Some(limit) = self.config.fetch_timeout else {
            return source.list_live_emojis(server_id).await;
        };

        match tokio::time::timeout(limit, source.list_live_emojis(server_id)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout_ms = limit.as_millis() as u64, "Live list fetch timed out");
                Err(DomainError::CacheError(format!(
                    "live emoji fetch for server {server_id} timed out"
                )))
            }
        }
    }

    /// Drop the cached list for a server
    pub async fn invalidate(&self, server_id: Snowflake) -> bool {
        self.entries.lock().await.remove(&server_id).is_some()
    }

    /// Number of servers with a cached list, expired or not
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for LiveListCache {
    fn default() -> Self {
        Self::new(LiveListConfig::default())
    }
}
