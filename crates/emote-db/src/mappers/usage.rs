//! Usage model -> entity mapper

use emote_core::entities::ItemUsage;
use emote_core::value_objects::{ItemKind, Snowflake};

use crate::models::UsageModel;

/// Convert a row of either kind table to an `ItemUsage`
///
/// The kind is not stored in the row; it is implied by the table queried.
pub fn usage_from_model(kind: ItemKind, model: UsageModel) -> ItemUsage {
    ItemUsage {
        kind,
        server_id: Snowflake::new(model.server_id),
        item_id: Snowflake::new(model.item_id),
        name: model.item_name,
        usage_count: model.usage_count.max(0),
        first_used: model.first_used,
        last_used: model.last_used,
    }
}
