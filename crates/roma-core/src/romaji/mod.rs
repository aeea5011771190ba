//! Romaji-to-hiragana conversion for the mapping log.
//!
//! Uses a sorted lookup table with prefix queries to greedily turn a
//! converted token back into hiragana, handling sokuon (っ) and hatsuon (ん).

mod config;
mod convert;
mod table;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use convert::to_hiragana;
pub use table::{LookupResult, RomajiTable, DEFAULT_TOML};
