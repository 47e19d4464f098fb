//! Interaction tokens
//!
//! Wire format: `<prefix>:<page>` or `<prefix>:<page>:jump`.

use std::fmt;

use emote_core::ItemKind;

const JUMP_SUFFIX: &str = "jump";

/// Pagination state carried by a button or modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageToken {
    pub kind: ItemKind,
    pub page: usize,
    /// Opens the page jump modal instead of changing page
    pub jump: bool,
}

/// Why a token was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("unknown token prefix: {0}")]
    UnknownPrefix(String),

    #[error("invalid page number: {0}")]
    InvalidPage(String),

    #[error("unexpected token suffix: {0}")]
    InvalidSuffix(String),

    #[error("malformed token")]
    Malformed,
}

impl PageToken {
    pub fn page(kind: ItemKind, page: usize) -> Self {
        Self {
            kind,
            page,
            jump: false,
        }
    }

    pub fn jump(kind: ItemKind, page: usize) -> Self {
        Self {
            kind,
            page,
            jump: true,
        }
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Parse a token from a component or modal custom id
    pub fn parse(raw: &str) -> Result<Self, TokenError> {
        let mut parts = raw.split(':');
        let (Some(prefix), Some(page)) = (parts.next(), parts.next()) else {
            return Err(TokenError::Malformed);
        };
        let jump = match parts.next() {
            None => false,
            Some(JUMP_SUFFIX) => true,
            Some(other) => return Err(TokenError::InvalidSuffix(other.to_string())),
        };
        if parts.next().is_some() {
            return Err(TokenError::Malformed);
        }

        let kind = ItemKind::from_token_prefix(prefix)
            .ok_or_else(|| TokenError::UnknownPrefix(prefix.to_string()))?;
        let page = page
            .parse::<u32>()
            .ok()
            .and_then(|page| usize::try_from(page).ok())
            .ok_or_else(|| TokenError::InvalidPage(page.to_string()))?;

        Ok(Self { kind, page, jump })
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.token_prefix(), self.page)?;
        if self.jump {
            write!(f, ":{JUMP_SUFFIX}")?;
        }
        Ok(())
    }
}
