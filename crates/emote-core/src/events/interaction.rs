//! Interaction payloads (slash commands, buttons, modal submissions)

use serde::{Deserialize, Serialize};

use super::gateway_event::{Author, MessagePayload};
use crate::value_objects::Snowflake;

/// An interaction delivered to the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionPayload {
    pub id: Snowflake,
    /// Continuation token used by the renderer to answer
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    /// Present only when invoked inside a server
    #[serde(default)]
    pub member: Option<Member>,
    /// Message the component is attached to
    #[serde(default)]
    pub message: Option<MessagePayload>,
    pub data: InteractionData,
}

impl InteractionPayload {
    /// Server the interaction was invoked in, if it was invoked by a member
    #[must_use]
    pub fn server_id(&self) -> Option<Snowflake> {
        self.member
            .as_ref()
            .and(self.guild_id)
            .filter(|id| !id.is_zero())
    }
}

/// Invoking server member
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub user: Option<Author>,
}

/// Interaction kind-specific data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionData {
    ApplicationCommand {
        name: String,
        #[serde(default)]
        options: Vec<CommandOption>,
    },
    MessageComponent {
        custom_id: String,
    },
    ModalSubmit {
        custom_id: String,
        #[serde(default)]
        components: Vec<TextInputValue>,
    },
}

/// Slash command option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub value: serde_json::Value,
}

/// Submitted text input from a modal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextInputValue {
    pub custom_id: String,
    #[serde(default)]
    pub value: String,
}

impl InteractionData {
    /// Boolean option value, if the option was supplied as a boolean
    #[must_use]
    pub fn bool_option(&self, name: &str) -> Option<bool> {
        match self {
            Self::ApplicationCommand { options, .. } => options
                .iter()
                .find(|o| o.name == name)
                .and_then(|o| o.value.as_bool()),
            _ => None,
        }
    }

    /// Submitted value of a modal text input
    #[must_use]
    pub fn text_input(&self, custom_id: &str) -> Option<&str> {
        match self {
            Self::ModalSubmit { components, .. } => components
                .iter()
                .find(|c| c.custom_id == custom_id)
                .map(|c| c.value.as_str()),
            _ => None,
        }
    }
}
