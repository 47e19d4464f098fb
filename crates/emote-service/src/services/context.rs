//! Service context - dependency container for services
//!
//! Holds the counter store, the live emoji source, and the live list cache.

use std::sync::Arc;

use emote_cache::LiveListCache;
use emote_core::traits::{LiveEmojiSource, UsageRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every component is shared behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    usage_repo: Arc<dyn UsageRepository>,
    live_source: Arc<dyn LiveEmojiSource>,
    live_cache: Arc<LiveListCache>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        usage_repo: Arc<dyn UsageRepository>,
        live_source: Arc<dyn LiveEmojiSource>,
        live_cache: Arc<LiveListCache>,
    ) -> Self {
        Self {
            usage_repo,
            live_source,
            live_cache,
        }
    }

    // === Repositories ===

    /// Get the usage counter repository
    pub fn usage_repo(&self) -> &dyn UsageRepository {
        self.usage_repo.as_ref()
    }

    // === Platform ===

    /// Get the live emoji source
    pub fn live_source(&self) -> &dyn LiveEmojiSource {
        self.live_source.as_ref()
    }

    // === Cache ===

    /// Get the live emoji list cache
    pub fn live_cache(&self) -> &LiveListCache {
        self.live_cache.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("usage_repo", &"dyn UsageRepository")
            .field("live_source", &"dyn LiveEmojiSource")
            .field("live_cache", &self.live_cache)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    usage_repo: Option<Arc<dyn UsageRepository>>,
    live_source: Option<Arc<dyn LiveEmojiSource>>,
    live_cache: Option<Arc<LiveListCache>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn usage_repo(mut self, repo: Arc<dyn UsageRepository>) -> Self {
        self.usage_repo = Some(repo);
        self
    }

    pub fn live_source(mut self, source: Arc<dyn LiveEmojiSource>) -> Self {
        self.live_source = Some(source);
        self
    }

    pub fn live_cache(mut self, cache: Arc<LiveListCache>) -> Self {
        self.live_cache = Some(cache);
        self
    }

    /// Build the ServiceContext
    ///
    /// A missing cache is replaced by one with the default configuration.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.usage_repo
                .ok_or_else(|| ServiceError::validation("usage_repo is required"))?,
            self.live_source
                .ok_or_else(|| ServiceError::validation("live_source is required"))?,
            self.live_cache.unwrap_or_default(),
        ))
    }
}
