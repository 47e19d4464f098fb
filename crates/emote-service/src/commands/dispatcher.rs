//! Command dispatcher
//!
//! Answers slash commands, pagination buttons, and page jump submissions.
//! Commands always get a reply; component and modal interactions that cannot
//! be served get none and the client keeps showing the old page.

use emote_core::events::{InteractionData, InteractionPayload};
use emote_core::{ItemKind, Snowflake};
use tracing::{debug, instrument, warn};

use crate::dto::{render, InteractionResponse, ResponseData};
use crate::pagination::{jump_modal, resolve_jump_submission, PageToken, PAGE_INPUT_ID};
use crate::services::{ServiceContext, ServiceError, ServiceResult, UsageService};

use super::definitions::{Command, SHARE_OPTION};
use super::messages;

/// Routes interactions to command handlers
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    ctx: ServiceContext,
}

impl CommandDispatcher {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    /// Produce the response for an interaction, if it warrants one
    #[instrument(skip(self, interaction), fields(interaction_id = %interaction.id))]
    pub async fn dispatch(&self, interaction: &InteractionPayload) -> Option<InteractionResponse> {
        match &interaction.data {
            InteractionData::ApplicationCommand { name, .. } => {
                self.handle_command(name, interaction).await
            }
            InteractionData::MessageComponent { custom_id } => {
                self.handle_component(custom_id, interaction).await
            }
            InteractionData::ModalSubmit { custom_id, .. } => {
                self.handle_modal(custom_id, interaction).await
            }
        }
    }

    // ========================================================================
    // Slash commands
    // ========================================================================

    async fn handle_command(
        &self,
        name: &str,
        interaction: &InteractionPayload,
    ) -> Option<InteractionResponse> {
        let Some(command) = Command::from_name(name) else {
            debug!(name, "Ignoring unknown command");
            return None;
        };

        let server_id = match require_server(interaction) {
            Ok(server_id) => server_id,
            Err(e) => return Some(InteractionResponse::error(&e.to_string())),
        };

        let response = match command {
            Command::ListEmotes | Command::ListStickers => {
                let kind = if command == Command::ListEmotes {
                    ItemKind::Emoji
                } else {
                    ItemKind::Sticker
                };
                let share = interaction.data.bool_option(SHARE_OPTION).unwrap_or(false);
                self.list_usage(kind, server_id, share).await
            }
            Command::ListLeastUsed => self.list_least_used(server_id).await,
            Command::ResetCount => self.reset_counts(server_id).await,
        };

        Some(response)
    }

    async fn list_usage(
        &self,
        kind: ItemKind,
        server_id: Snowflake,
        share: bool,
    ) -> InteractionResponse {
        let usage = UsageService::new(&self.ctx);

        let total_pages = match usage.total_pages(kind, server_id).await {
            Ok(total) => total,
            Err(e) => {
                warn!(%kind, error = %e, "Failed to count tracked items");
                return InteractionResponse::error(messages::count_failed(kind));
            }
        };

        let rows = match usage.page(kind, server_id, 0).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(%kind, error = %e, "Failed to list tracked items");
                return InteractionResponse::error(messages::fetch_failed(kind));
            }
        };

        if rows.is_empty() {
            return InteractionResponse::error(render::no_data_message(kind));
        }

        InteractionResponse::ChannelMessage(
            render::usage_page(kind, &rows, 0, total_pages).shared(share),
        )
    }

    async fn list_least_used(&self, server_id: Snowflake) -> InteractionResponse {
        let usage = UsageService::new(&self.ctx);

        let live = match usage.live_emojis(server_id).await {
            Ok(live) => live,
            Err(e) => {
                warn!(error = %e, "Failed to fetch live emoji list");
                return InteractionResponse::error(messages::LIVE_LIST_FAILED);
            }
        };

        if live.is_empty() {
            return InteractionResponse::error(messages::NO_LIVE_EMOJIS);
        }

        match usage.least_used(server_id, &live).await {
            Ok(rows) => InteractionResponse::ChannelMessage(render::least_used(&rows)),
            Err(e) => {
                warn!(error = %e, "Failed to list least used emojis");
                InteractionResponse::error(messages::LEAST_USED_FAILED)
            }
        }
    }

    async fn reset_counts(&self, server_id: Snowflake) -> InteractionResponse {
        match UsageService::new(&self.ctx).reset(server_id).await {
            Ok(_) => {
                InteractionResponse::ChannelMessage(ResponseData::ephemeral(messages::RESET_DONE))
            }
            Err(e) => {
                warn!(error = %e, "Failed to reset counts");
                InteractionResponse::error(messages::RESET_FAILED)
            }
        }
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    async fn handle_component(
        &self,
        custom_id: &str,
        interaction: &InteractionPayload,
    ) -> Option<InteractionResponse> {
        let token = match PageToken::parse(custom_id) {
            Ok(token) => token,
            Err(e) => {
                debug!(custom_id, error = %e, "Ignoring component with invalid token");
                return None;
            }
        };

        if token.jump {
            return Some(InteractionResponse::Modal(jump_modal(&token)));
        }

        let server_id = self.component_server(interaction)?;
        let total_pages = self.total_pages(token.kind, server_id).await?;
        self.render_page(token.kind, server_id, token.page, total_pages)
            .await
    }

    async fn handle_modal(
        &self,
        custom_id: &str,
        interaction: &InteractionPayload,
    ) -> Option<InteractionResponse> {
        let token = match PageToken::parse(custom_id) {
            Ok(token) => token,
            Err(e) => {
                debug!(custom_id, error = %e, "Ignoring modal with invalid token");
                return None;
            }
        };

        let Some(value) = interaction.data.text_input(PAGE_INPUT_ID) else {
            debug!("Modal submission without a page input");
            return None;
        };

        let server_id = self.component_server(interaction)?;
        let total_pages = self.total_pages(token.kind, server_id).await?;

        let Some(page) = resolve_jump_submission(value, total_pages) else {
            debug!(value, total_pages, "Ignoring out-of-range page jump");
            return None;
        };

        self.render_page(token.kind, server_id, page, total_pages).await
    }

    fn component_server(&self, interaction: &InteractionPayload) -> Option<Snowflake> {
        match require_server(interaction) {
            Ok(server_id) => Some(server_id),
            Err(e) => {
                debug!(code = e.error_code(), "Ignoring pagination outside of a server");
                None
            }
        }
    }

    async fn total_pages(&self, kind: ItemKind, server_id: Snowflake) -> Option<usize> {
        match UsageService::new(&self.ctx).total_pages(kind, server_id).await {
            Ok(total) => Some(total),
            Err(e) => {
                warn!(%kind, error = %e, "Failed to count tracked items");
                None
            }
        }
    }

    async fn render_page(
        &self,
        kind: ItemKind,
        server_id: Snowflake,
        page: usize,
        total_pages: usize,
    ) -> Option<InteractionResponse> {
        match UsageService::new(&self.ctx).page(kind, server_id, page).await {
            Ok(rows) => Some(InteractionResponse::UpdateMessage(render::usage_page(
                kind,
                &rows,
                page,
                total_pages,
            ))),
            Err(e) => {
                warn!(%kind, page, error = %e, "Failed to list tracked items");
                None
            }
        }
    }
}

/// Server an interaction was invoked in by a member
fn require_server(interaction: &InteractionPayload) -> ServiceResult<Snowflake> {
    interaction.server_id().ok_or(ServiceError::NotInServer)
}
