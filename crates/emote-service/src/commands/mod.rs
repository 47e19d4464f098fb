//! Slash commands and interaction dispatch

mod definitions;
mod dispatcher;
mod messages;

pub use definitions::{definitions, Command, CommandDefinition, CommandOptionDefinition};
pub use dispatcher::CommandDispatcher;
