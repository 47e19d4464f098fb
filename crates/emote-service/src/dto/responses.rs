//! Response DTOs for interactions
//!
//! All response DTOs implement `Serialize`; the renderer turns them into
//! platform calls.

use serde::Serialize;

/// Prefix on every user-visible error message
pub const ERROR_PREFIX: &str = "❌ ";

// ============================================================================
// Interaction Responses
// ============================================================================

/// Answer to one interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum InteractionResponse {
    /// New message in reply to a command
    ChannelMessage(ResponseData),
    /// Replace the message the component belongs to
    UpdateMessage(ResponseData),
    /// Open a modal dialog
    Modal(ModalData),
}

impl InteractionResponse {
    /// Ephemeral error reply, prefixed with the error marker
    pub fn error(message: &str) -> Self {
        Self::ChannelMessage(ResponseData::ephemeral(format!("{ERROR_PREFIX}{message}")))
    }

    /// Message body, for responses that carry one
    pub fn data(&self) -> Option<&ResponseData> {
        match self {
            Self::ChannelMessage(data) | Self::UpdateMessage(data) => Some(data),
            Self::Modal(_) => None,
        }
    }
}

/// Message body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseData {
    pub content: String,
    /// Visible only to the invoking user
    pub ephemeral: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ActionRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

impl ResponseData {
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
            ..Default::default()
        }
    }

    /// Clear the ephemeral flag when the invoker asked to share
    pub fn shared(mut self, share: bool) -> Self {
        if share {
            self.ephemeral = false;
        }
        self
    }
}

// ============================================================================
// Components
// ============================================================================

/// Row of buttons
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionRow {
    pub components: Vec<Button>,
}

impl ActionRow {
    /// Button labels in display order
    pub fn labels(&self) -> Vec<&str> {
        self.components.iter().map(|b| b.label.as_str()).collect()
    }
}

/// Clickable button carrying an interaction token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub custom_id: String,
    pub label: String,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
}

/// Rich embed with a title and an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

// ============================================================================
// Modals
// ============================================================================

/// Modal dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalData {
    pub custom_id: String,
    pub title: String,
    pub inputs: Vec<TextInput>,
}

/// Text field inside a modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextInput {
    pub custom_id: String,
    pub label: String,
    pub style: TextInputStyle,
    pub placeholder: String,
    pub value: String,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextInputStyle {
    Short,
    Paragraph,
}
