//! Live emoji listing over the platform REST API

use std::fmt;

use async_trait::async_trait;
use emote_common::PlatformConfig;
use emote_core::{DomainError, LiveEmoji, LiveEmojiSource, RepoResult, Snowflake};
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Emoji object as returned by `GET /guilds/{id}/emojis`
#[derive(Debug, Deserialize)]
struct EmojiObject {
    #[serde(default)]
    id: Option<Snowflake>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    animated: bool,
}

impl EmojiObject {
    fn into_live(self) -> Option<LiveEmoji> {
        Some(LiveEmoji {
            id: self.id?,
            name: self.name.unwrap_or_default(),
            animated: self.animated,
        })
    }
}

/// `LiveEmojiSource` backed by the platform REST API
#[derive(Clone)]
pub struct RestLiveEmojiSource {
    client: reqwest::Client,
    api_base: String,
    authorization: String,
}

impl RestLiveEmojiSource {
    pub fn new(config: &PlatformConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("emote-tracker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            authorization: format!("Bot {}", config.token),
        })
    }

    fn emojis_url(&self, server_id: Snowflake) -> String {
        format!("{}/guilds/{server_id}/emojis", self.api_base)
    }
}

impl fmt::Debug for RestLiveEmojiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestLiveEmojiSource")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

fn external(err: reqwest::Error) -> DomainError {
    DomainError::ExternalService(err.to_string())
}

#[async_trait]
impl LiveEmojiSource for RestLiveEmojiSource {
    #[instrument(skip(self))]
    async fn list_live_emojis(&self, server_id: Snowflake) -> RepoResult<Vec<LiveEmoji>> {
        let emojis: Vec<EmojiObject> = self
            .client
            .get(self.emojis_url(server_id))
            .header(AUTHORIZATION, &self.authorization)
            .send()
            .await
            .map_err(external)?
            .error_for_status()
            .map_err(external)?
            .json()
            .await
            .map_err(external)?;

        let live: Vec<LiveEmoji> = emojis.into_iter().filter_map(EmojiObject::into_live).collect();
        debug!(count = live.len(), "Fetched live emoji list");
        Ok(live)
    }
}
