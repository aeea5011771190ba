use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::OnceLock;

use super::config::{parse_romaji_toml, RomajiConfigError};

pub const DEFAULT_TOML: &str = include_str!("romaji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, PartialEq)]
pub enum LookupResult<'a> {
    None,
    Prefix,
    Exact(&'a str),
    ExactAndPrefix(&'a str),
}

/// Sorted romaji → kana table. Prefix queries are range scans over the
/// ordered keys.
#[derive(Debug)]
pub struct RomajiTable {
    map: BTreeMap<String, String>,
}

impl RomajiTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTable {
        static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
            RomajiTable { map }
        })
    }

    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        Self { map }
    }

    pub fn lookup(&self, romaji: &str) -> LookupResult<'_> {
        let has_children = self
            .map
            .range::<str, _>((Bound::Excluded(romaji), Bound::Unbounded))
            .next()
            .is_some_and(|(key, _)| key.starts_with(romaji));
        match (self.map.get(romaji), has_children) {
            (None, false) => LookupResult::None,
            (None, true) => LookupResult::Prefix,
            (Some(kana), false) => LookupResult::Exact(kana.as_str()),
            (Some(kana), true) => LookupResult::ExactAndPrefix(kana.as_str()),
        }
    }
}
