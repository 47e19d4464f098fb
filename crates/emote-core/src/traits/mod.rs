//! Traits (ports) implemented by the infrastructure crates

mod repositories;

pub use repositories::{LiveEmojiSource, RepoResult, UsageRepository};
