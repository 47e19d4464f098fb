//! Event feed wire format
//!
//! Inbound lines are `GatewayEvent`s; outbound lines are `OutboundResponse`s.

mod messages;

pub use messages::{decode_event, OutboundResponse};
