//! Event router
//!
//! One dispatch function over every event the tracker consumes. Routing never
//! fails: store errors are logged here and the event is dropped.

use emote_core::events::{GatewayEvent, MessagePayload, ReactionPayload};
use emote_core::Snowflake;
use emote_service::services::TrackingService;
use emote_service::{CommandDispatcher, InteractionResponse, ServiceContext};
use tracing::{debug, instrument, warn};

use super::error::HandlerResult;

/// Routes dispatch events to tracking and command handling
#[derive(Debug, Clone)]
pub struct EventRouter {
    dispatcher: CommandDispatcher,
}

impl EventRouter {
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(ctx),
        }
    }

    pub fn context(&self) -> &ServiceContext {
        self.dispatcher.context()
    }

    /// Handle one event; only interactions produce a response
    #[instrument(skip(self, event), fields(event = event.name()))]
    pub async fn dispatch(&self, event: GatewayEvent) -> Option<InteractionResponse> {
        match event {
            GatewayEvent::MessageCreate(message) => {
                self.on_message(&message, message.guild_id).await;
                None
            }
            GatewayEvent::MessageReactionAdd(reaction) => {
                if let Err(e) = self.on_reaction_add(&reaction).await {
                    warn!(code = e.code(), error = %e, "Failed to record reaction");
                }
                None
            }
            GatewayEvent::MessageReactionRemove(reaction) => {
                if let Err(e) = self.on_reaction_remove(&reaction).await {
                    warn!(code = e.code(), error = %e, "Failed to undo reaction");
                }
                None
            }
            GatewayEvent::InteractionCreate(interaction) => {
                if let Some(message) = &interaction.message {
                    self.on_message(message, interaction.guild_id).await;
                }
                self.dispatcher.dispatch(&interaction).await
            }
        }
    }

    /// Count the references in a message posted in `guild_id`
    async fn on_message(
        &self,
        message: &MessagePayload,
        guild_id: Option<Snowflake>,
    ) {
        if message.is_from_bot() {
            return;
        }
        let Some(server_id) = server(guild_id) else {
            debug!("Ignoring direct message");
            return;
        };

        TrackingService::new(self.context())
            .record_message(server_id, &message.content, &message.sticker_items)
            .await;
    }

    async fn on_reaction_add(&self, reaction: &ReactionPayload) -> HandlerResult<bool> {
        let Some((server_id, emoji_id)) = custom_reaction(reaction) else {
            return Ok(false);
        };
        let name = reaction.emoji.name.as_deref().unwrap_or_default();

        TrackingService::new(self.context())
            .record_reaction_add(server_id, emoji_id, name)
            .await?;
        Ok(true)
    }

    async fn on_reaction_remove(&self, reaction: &ReactionPayload) -> HandlerResult<bool> {
        let Some((server_id, emoji_id)) = custom_reaction(reaction) else {
            return Ok(false);
        };

        let removed = TrackingService::new(self.context())
            .record_reaction_remove(server_id, emoji_id)
            .await?;
        Ok(removed)
    }
}

fn server(guild_id: Option<Snowflake>) -> Option<Snowflake> {
    guild_id.filter(|id| !id.is_zero())
}

/// Server and emoji id of a custom emoji reaction inside a server
fn custom_reaction(reaction: &ReactionPayload) -> Option<(Snowflake, Snowflake)> {
    let server_id = server(reaction.guild_id)?;
    if !reaction.emoji.is_custom() {
        return None;
    }
    Some((server_id, reaction.emoji.id?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use emote_core::ItemKind;
    use emote_db::{connect_in_memory, SqliteUsageRepository};
    use emote_service::ServiceContextBuilder;
    use serde_json::{json, Value};
    use std::sync::Arc;

    const SERVER: Snowflake = Snowflake::new(10);

    struct NoLiveEmojis;

    #[async_trait::async_trait]
    impl emote_core::LiveEmojiSource for NoLiveEmojis {
        async fn list_live_emojis(
            &self,
            _server_id: Snowflake,
        ) -> emote_core::RepoResult<Vec<emote_core::LiveEmoji>> {
            Ok(Vec::new())
        }
    }

    async fn router() -> EventRouter {
        let pool = connect_in_memory().await.unwrap();
        let ctx = ServiceContextBuilder::new()
            .usage_repo(Arc::new(SqliteUsageRepository::new(pool)))
            .live_source(Arc::new(NoLiveEmojis))
            .build()
            .unwrap();
        EventRouter::new(ctx)
    }

    fn event(value: Value) -> GatewayEvent {
        serde_json::from_value(value).unwrap()
    }

    fn message(guild: Option<&str>, bot: bool, content: &str) -> GatewayEvent {
        event(json!({
            "t": "MESSAGE_CREATE",
            "d": {
                "guild_id": guild,
                "author": {"id": "5", "bot": bot},
                "content": content,
            }
        }))
    }

    fn reaction(t: &str, id: Option<&str>, name: &str) -> GatewayEvent {
        event(json!({
            "t": t,
            "d": {
                "user_id": "5",
                "guild_id": "10",
                "emoji": {"id": id, "name": name}
            }
        }))
    }

    async fn count(router: &EventRouter, kind: ItemKind) -> i64 {
        router.context().usage_repo().count(kind, SERVER).await.unwrap()
    }

    async fn usage_of(router: &EventRouter, id: i64) -> i64 {
        router
            .context()
            .usage_repo()
            .list(ItemKind::Emoji, SERVER, 0, 25)
            .await
            .unwrap()
            .into_iter()
            .find(|row| row.item_id == Snowflake::new(id))
            .map_or(0, |row| row.usage_count)
    }

    #[tokio::test]
    async fn test_message_counts_emojis_and_stickers() {
        let router = router().await;
        let msg = event(json!({
            "t": "MESSAGE_CREATE",
            "d": {
                "guild_id": "10",
                "author": {"id": "5"},
                "content": "<:foo:111> and <a:bar:222>",
                "sticker_items": [{"id": "900", "name": "wave"}]
            }
        }));

        assert!(router.dispatch(msg).await.is_none());
        assert_eq!(count(&router, ItemKind::Emoji).await, 2);
        assert_eq!(count(&router, ItemKind::Sticker).await, 1);
    }

    #[tokio::test]
    async fn test_bot_and_direct_messages_are_ignored() {
        let router = router().await;
        router.dispatch(message(Some("10"), true, "<:foo:111>")).await;
        router.dispatch(message(None, false, "<:foo:111>")).await;
        router.dispatch(message(Some("0"), false, "<:foo:111>")).await;

        assert_eq!(count(&router, ItemKind::Emoji).await, 0);
    }

    #[tokio::test]
    async fn test_reactions() {
        let router = router().await;
        router
            .dispatch(reaction("MESSAGE_REACTION_ADD", Some("111"), "foo"))
            .await;
        router
            .dispatch(reaction("MESSAGE_REACTION_ADD", Some("111"), "foo"))
            .await;
        router
            .dispatch(reaction("MESSAGE_REACTION_REMOVE", Some("111"), "foo"))
            .await;

        assert_eq!(usage_of(&router, 111).await, 1);
    }

    #[tokio::test]
    async fn test_unicode_reactions_are_ignored() {
        let router = router().await;
        router
            .dispatch(reaction("MESSAGE_REACTION_ADD", None, "👍"))
            .await;
        assert_eq!(count(&router, ItemKind::Emoji).await, 0);
    }

    #[tokio::test]
    async fn test_remove_of_untracked_emoji_creates_nothing() {
        let router = router().await;
        router
            .dispatch(reaction("MESSAGE_REACTION_REMOVE", Some("111"), "foo"))
            .await;
        assert_eq!(count(&router, ItemKind::Emoji).await, 0);
    }

    #[tokio::test]
    async fn test_interaction_counts_embedded_message_and_responds() {
        let router = router().await;
        let interaction = event(json!({
            "t": "INTERACTION_CREATE",
            "d": {
                "id": "77",
                "token": "tok",
                "guild_id": "10",
                "member": {},
                "message": {
                    "author": {"id": "5"},
                    "content": "<:foo:111>"
                },
                "data": {"type": "application_command", "name": "listemotes"}
            }
        }));

        let response = router.dispatch(interaction).await.unwrap();
        let data = response.data().unwrap();
        assert!(data.content.contains("<:foo:111> **x1**"));
    }

    #[tokio::test]
    async fn test_unknown_interaction_has_no_response() {
        let router = router().await;
        let interaction = event(json!({
            "t": "INTERACTION_CREATE",
            "d": {
                "id": "77",
                "guild_id": "10",
                "member": {},
                "data": {"type": "message_component", "custom_id": "unrelated"}
            }
        }));
        assert!(router.dispatch(interaction).await.is_none());
    }
}
