//! Live emoji list cache

mod cache;

pub use cache::{LiveListCache, LiveListConfig};
