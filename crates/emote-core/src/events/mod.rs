//! Inbound platform events
//!
//! The tracker consumes a small, closed set of gateway dispatches. Anything
//! else on the feed fails to deserialize and is dropped by the caller.

mod gateway_event;
mod interaction;

pub use gateway_event::{
    Author, GatewayEvent, MessagePayload, ReactionEmoji, ReactionPayload, StickerItem,
};
pub use interaction::{CommandOption, InteractionData, InteractionPayload, Member, TextInputValue};
