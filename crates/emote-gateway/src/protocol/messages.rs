//! Feed line format

use emote_core::{GatewayEvent, Snowflake};
use emote_service::InteractionResponse;
use serde::Serialize;

/// One response line written to the feed output
#[derive(Debug, Clone, Serialize)]
pub struct OutboundResponse {
    /// Interaction being answered
    pub interaction_id: Snowflake,
    pub response: InteractionResponse,
}

impl OutboundResponse {
    #[must_use]
    pub fn new(interaction_id: Snowflake, response: InteractionResponse) -> Self {
        Self {
            interaction_id,
            response,
        }
    }
}

/// Parse one feed line.
///
/// Returns `Ok(None)` for blank lines.
pub fn decode_event(line: &str) -> Result<Option<GatewayEvent>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some)
}
