//! Data transfer objects for interaction responses
//!
//! This module provides:
//! - Response DTOs, the contract with the platform renderer
//! - Renderers turning usage rows into response bodies

pub mod render;
pub mod responses;

pub use responses::{
    ActionRow, Button, ButtonStyle, Embed, InteractionResponse, ModalData, ResponseData, TextInput,
    TextInputStyle,
};
