//! Command names and registration metadata
//!
//! Registration itself happens outside this process; `definitions()` is the
//! payload handed to whoever registers the commands.

use serde::Serialize;

/// Option that makes a listing visible to everyone
pub const SHARE_OPTION: &str = "share";

/// Manage Server permission bit
const MANAGE_GUILD: u64 = 1 << 5;

/// Supported slash commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListEmotes,
    ListStickers,
    ListLeastUsed,
    ResetCount,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::ListEmotes,
        Command::ListStickers,
        Command::ResetCount,
        Command::ListLeastUsed,
    ];

    /// Slash command name
    pub const fn name(self) -> &'static str {
        match self {
            Self::ListEmotes => "listemotes",
            Self::ListStickers => "liststickers",
            Self::ListLeastUsed => "listleastused",
            Self::ResetCount => "resetcount",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ListEmotes => "List custom emoji usage statistics (Moderator only)",
            Self::ListStickers => "List sticker usage statistics (Moderator only)",
            Self::ListLeastUsed => {
                "List least used emojis from the current guild list found in the database"
            }
            Self::ResetCount => {
                "Reset all emoji and sticker counts for this server (Moderator only)"
            }
        }
    }

    /// Whether the command accepts the boolean `share` option
    pub const fn accepts_share(self) -> bool {
        matches!(self, Self::ListEmotes | Self::ListStickers)
    }
}

/// Registration payload for one command
#[derive(Debug, Clone, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// Permission bit set, as a decimal string
    pub default_member_permissions: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionDefinition>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandOptionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
}

/// Registration payloads for every command
pub fn definitions() -> Vec<CommandDefinition> {
    Command::ALL
        .into_iter()
        .map(|command| CommandDefinition {
            name: command.name(),
            description: command.description(),
            default_member_permissions: MANAGE_GUILD.to_string(),
            options: if command.accepts_share() {
                vec![CommandOptionDefinition {
                    name: SHARE_OPTION,
                    description: "Everyone can see the list",
                    kind: "boolean",
                    required: false,
                }]
            } else {
                Vec::new()
            },
        })
        .collect()
}
