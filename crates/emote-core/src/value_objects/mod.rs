//! Value objects - immutable types that represent domain concepts

mod item_kind;
mod snowflake;

pub use item_kind::ItemKind;
pub use snowflake::{Snowflake, SnowflakeParseError};
