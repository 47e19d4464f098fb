//! # emote-service
//!
//! Application layer containing usage tracking, usage queries, the pagination
//! engine, response DTOs, and the command dispatcher.

pub mod commands;
pub mod dto;
pub mod pagination;
pub mod services;

pub use commands::{Command, CommandDispatcher};
pub use dto::InteractionResponse;
pub use services::{ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};

#[cfg(test)]
mod test_support;
