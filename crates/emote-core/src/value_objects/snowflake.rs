//! Platform ids
//!
//! Servers, emoji, stickers, users, and interactions are all addressed by
//! snowflakes. They are opaque keys here and are stored as SQLite integers.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Platform snowflake id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Integer form bound into store queries
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Zero stands in for an id the platform left out
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse the decimal id found in mention markup and payloads
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| SnowflakeParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid snowflake: {0:?}")]
pub struct SnowflakeParseError(pub String);

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// Ids travel as JSON strings
impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Number(i64),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Text(text) => Snowflake::parse(&text).map_err(de::Error::custom),
            Wire::Number(id) => Ok(Snowflake(id)),
        }
    }
}
