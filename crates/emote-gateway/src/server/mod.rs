//! Tracker setup
//!
//! Wires the store, the live list cache, and the REST source into an
//! `EventRouter`, then runs the event feed over stdin and stdout.

mod feed;

pub use feed::{run_feed, FeedStats};

use std::sync::Arc;

use emote_cache::{LiveListCache, LiveListConfig};
use emote_common::{AppConfig, AppError, AppResult};
use emote_db::SqliteUsageRepository;
use emote_service::ServiceContextBuilder;
use tokio::io::{self, BufReader};

use crate::handlers::EventRouter;
use crate::platform::RestLiveEmojiSource;

/// Initialize all dependencies and create the `EventRouter`
pub async fn build_router(config: &AppConfig) -> AppResult<EventRouter> {
    tracing::info!("Opening counter store...");
    let db_config = emote_db::DatabaseConfig::from(&config.database);
    let pool = emote_db::create_pool(&db_config)
        .await
        .map_err(AppError::database)?;
    tracing::info!("Counter store ready");

    let live_source = RestLiveEmojiSource::new(&config.platform)
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
    let live_cache = LiveListCache::new(LiveListConfig::from(&config.cache));

    let service_context = ServiceContextBuilder::new()
        .usage_repo(Arc::new(SqliteUsageRepository::new(pool)))
        .live_source(Arc::new(live_source))
        .live_cache(Arc::new(live_cache))
        .build()?;

    Ok(EventRouter::new(service_context))
}

/// Run the tracker until the event feed closes
pub async fn run(config: AppConfig) -> AppResult<FeedStats> {
    let router = build_router(&config).await?;

    tracing::info!("Reading events from stdin");
    let stats = run_feed(router, BufReader::new(io::stdin()), io::stdout()).await?;
    tracing::info!(
        events = stats.events,
        skipped = stats.skipped,
        responses = stats.responses,
        "Event feed closed"
    );

    Ok(stats)
}
