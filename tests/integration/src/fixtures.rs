//! Test fixtures and event builders
//!
//! Builds dispatch events in their wire shape.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique interaction ids
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique id for test data
pub fn unique_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Member-authored message in a server
pub fn message(server: u64, content: &str) -> Value {
    json!({
        "t": "MESSAGE_CREATE",
        "d": {
            "id": unique_id().to_string(),
            "guild_id": server.to_string(),
            "author": {"id": "5", "bot": false},
            "content": content,
        }
    })
}

/// Message carrying stickers, given as `(id, name)`
pub fn sticker_message(server: u64, stickers: &[(u64, &str)]) -> Value {
    let items: Vec<Value> = stickers
        .iter()
        .map(|(id, name)| json!({"id": id.to_string(), "name": name}))
        .collect();
    json!({
        "t": "MESSAGE_CREATE",
        "d": {
            "guild_id": server.to_string(),
            "author": {"id": "5"},
            "content": "",
            "sticker_items": items,
        }
    })
}

fn reaction(t: &str, server: u64, emoji_id: u64, name: &str) -> Value {
    json!({
        "t": t,
        "d": {
            "user_id": "5",
            "message_id": unique_id().to_string(),
            "guild_id": server.to_string(),
            "emoji": {"id": emoji_id.to_string(), "name": name},
        }
    })
}

pub fn reaction_add(server: u64, emoji_id: u64, name: &str) -> Value {
    reaction("MESSAGE_REACTION_ADD", server, emoji_id, name)
}

pub fn reaction_remove(server: u64, emoji_id: u64, name: &str) -> Value {
    reaction("MESSAGE_REACTION_REMOVE", server, emoji_id, name)
}

fn interaction(server: u64, data: Value) -> Value {
    json!({
        "t": "INTERACTION_CREATE",
        "d": {
            "id": unique_id().to_string(),
            "token": "interaction-token",
            "guild_id": server.to_string(),
            "member": {"user": {"id": "5"}},
            "data": data,
        }
    })
}

/// Slash command invoked by a moderator
pub fn command(server: u64, name: &str) -> Value {
    interaction(server, json!({"type": "application_command", "name": name}))
}

/// Listing command with the `share` option set
pub fn shared_command(server: u64, name: &str, share: bool) -> Value {
    interaction(
        server,
        json!({
            "type": "application_command",
            "name": name,
            "options": [{"name": "share", "value": share}],
        }),
    )
}

/// Pagination button press
pub fn button(server: u64, custom_id: &str) -> Value {
    interaction(
        server,
        json!({"type": "message_component", "custom_id": custom_id}),
    )
}

/// Page jump modal submission
pub fn jump_submit(server: u64, custom_id: &str, page: &str) -> Value {
    interaction(
        server,
        json!({
            "type": "modal_submit",
            "custom_id": custom_id,
            "components": [{"custom_id": "page_input", "value": page}],
        }),
    )
}
