//! Usage listings rendered as message bodies

use std::fmt::Write;

use emote_core::entities::ItemUsage;
use emote_core::{ItemKind, Snowflake};

use crate::pagination::navigation_row;

use super::responses::{Embed, ResponseData};

pub const EMOJI_HEADER: &str = "**Custom Emoji Usage Statistics**";
pub const STICKER_HEADER: &str = "**Sticker Usage Statistics**";
pub const LEAST_USED_HEADER: &str = "**Least Used Custom Emojis (tracked)**";
pub const LEAST_USED_EMPTY: &str = "No tracked emojis found in the current guild list.";

/// Message shown when a kind has no rows in a server
pub fn no_data_message(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Emoji => "No emoji data found for this server.",
        ItemKind::Sticker => "No sticker data found for this server.",
    }
}

/// `- <:name:id> **xN** (Last: <t:unix:R>)`
pub fn usage_line(row: &ItemUsage) -> String {
    format!(
        "- <:{}:{}> **x{}** (Last: <t:{}:R>)",
        row.name,
        row.item_id,
        row.usage_count,
        row.last_used_unix()
    )
}

pub fn sticker_image_url(id: Snowflake) -> String {
    format!("https://media.discordapp.net/stickers/{id}.webp?size=96&quality=lossless")
}

/// One page of a listing with its navigation row; ephemeral until shared
pub fn usage_page(kind: ItemKind, rows: &[ItemUsage], page: usize, total_pages: usize) -> ResponseData {
    let mut data = match kind {
        ItemKind::Emoji => emoji_body(rows),
        ItemKind::Sticker => sticker_body(rows),
    };
    data.components = vec![navigation_row(page, total_pages, kind)];
    data
}

fn emoji_body(rows: &[ItemUsage]) -> ResponseData {
    let mut content = format!("{EMOJI_HEADER}\n\n");
    if rows.is_empty() {
        content.push_str(no_data_message(ItemKind::Emoji));
    }
    for row in rows.iter().take(ItemKind::Emoji.page_size()) {
        let _ = writeln!(content, "{}", usage_line(row));
    }
    ResponseData::ephemeral(content)
}

fn sticker_body(rows: &[ItemUsage]) -> ResponseData {
    let embeds = rows
        .iter()
        .take(ItemKind::Sticker.page_size())
        .map(|row| Embed {
            title: format!("{} x{}", row.name, row.usage_count),
            image_url: Some(sticker_image_url(row.item_id)),
        })
        .collect();

    ResponseData {
        embeds,
        ..ResponseData::ephemeral(STICKER_HEADER)
    }
}

/// Least-used report; always ephemeral
pub fn least_used(rows: &[ItemUsage]) -> ResponseData {
    let mut content = format!("{LEAST_USED_HEADER}\n\n");
    if rows.is_empty() {
        content.push_str(LEAST_USED_EMPTY);
    }
    for row in rows {
        let _ = writeln!(content, "{}", usage_line(row));
    }
    ResponseData::ephemeral(content)
}
