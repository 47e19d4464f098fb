//! Chat platform REST access

mod rest;

pub use rest::RestLiveEmojiSource;
