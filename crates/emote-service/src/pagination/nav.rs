//! Navigation row and page jump modal

use emote_core::ItemKind;

use crate::dto::{ActionRow, Button, ButtonStyle, ModalData, TextInput, TextInputStyle};

use super::token::PageToken;

/// Pages skipped by the `<<` and `>>` buttons
const FAST_STEP: usize = 10;

/// Custom id of the page number field in the jump modal
pub const PAGE_INPUT_ID: &str = "page_input";

fn nav_button(kind: ItemKind, target: usize, label: &str) -> Button {
    Button {
        custom_id: PageToken::page(kind, target).encode(),
        label: label.to_string(),
        style: ButtonStyle::Primary,
        disabled: false,
    }
}

/// Buttons for moving between pages, in display order.
///
/// A page at or past `total_pages` only gets a disabled page indicator.
pub fn navigation_row(page: usize, total_pages: usize, kind: ItemKind) -> ActionRow {
    let total_pages = total_pages.max(1);
    let indicator = Button {
        custom_id: PageToken::jump(kind, page).encode(),
        label: format!("{}/{}", page.saturating_add(1), total_pages),
        style: ButtonStyle::Success,
        disabled: page >= total_pages,
    };

    if page >= total_pages {
        return ActionRow {
            components: vec![indicator],
        };
    }

    let last = total_pages - 1;
    let mut components = Vec::with_capacity(5);
    if page > 1 {
        components.push(nav_button(kind, page.saturating_sub(FAST_STEP), "<<"));
    }
    if page > 0 {
        components.push(nav_button(kind, page - 1, "<"));
    }
    components.push(indicator);
    if page < last {
        components.push(nav_button(kind, page + 1, ">"));
    }
    if page + 2 < total_pages {
        components.push(nav_button(kind, (page + FAST_STEP).min(last), ">>"));
    }

    ActionRow { components }
}

/// Modal asking for a page number, opened from a jump token
pub fn jump_modal(token: &PageToken) -> ModalData {
    let current = token.page.saturating_add(1);
    ModalData {
        custom_id: PageToken::jump(token.kind, token.page).encode(),
        title: "Page Jump".to_string(),
        inputs: vec![TextInput {
            custom_id: PAGE_INPUT_ID.to_string(),
            label: "Page".to_string(),
            style: TextInputStyle::Short,
            placeholder: format!("Go to page {current}"),
            value: current.to_string(),
            required: true,
        }],
    }
}

/// Zero-based target page from a submitted 1-based page number.
///
/// Returns `None` for non-numeric input or a page outside `1..=total_pages`;
/// values are never clamped.
pub fn resolve_jump_submission(value: &str, total_pages: usize) -> Option<usize> {
    let requested = value.trim().parse::<usize>().ok()?;
    let page = requested.checked_sub(1)?;
    (page < total_pages).then_some(page)
}
