//! Pagination engine
//!
//! Pagination state lives entirely in interaction tokens; nothing is stored
//! between requests.

mod nav;
mod token;

pub use nav::{jump_modal, navigation_row, resolve_jump_submission, PAGE_INPUT_ID};
pub use token::{PageToken, TokenError};

/// Pages needed for `total_rows` rows, never less than one
pub fn total_pages(total_rows: i64, page_size: usize) -> usize {
    let rows = usize::try_from(total_rows).unwrap_or(0);
    rows.div_ceil(page_size.max(1)).max(1)
}

/// Row offset of the first row on `page`
pub fn page_offset(page: usize, page_size: usize) -> i64 {
    i64::try_from(page.saturating_mul(page_size)).unwrap_or(i64::MAX)
}
