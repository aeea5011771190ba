use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct RomajiConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be lowercase ASCII letters: {0}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<romaji, kana>`.
///
/// Keys are matched against lower-cased tokens, so anything other than
/// `a`..`z` could never match and is rejected.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(RomajiConfigError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(config.mappings)
}
