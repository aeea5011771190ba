use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::unicode::{is_katakana_reading, to_full_width};

#[derive(Deserialize)]
struct LexiconFile {
    #[serde(default)]
    entries: Vec<RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    surface: String,
    reading: String,
    #[serde(default)]
    pron: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("entry {0} has an empty surface")]
    EmptySurface(usize),
    #[error("reading for {surface:?} must be katakana: {reading:?}")]
    InvalidReading { surface: String, reading: String },
    #[error("duplicate surface: {0}")]
    Duplicate(String),
}

/// Reading and pronunciation of one lexicon word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub reading: String,
    pub pron: String,
}

/// Surface → reading table for words the kana front-end cannot read by
/// itself (kanji, mixed words).
///
/// Surfaces are stored width-folded, the same way the front-end folds its
/// input, so `Wi-Fi` and `Ｗｉ－Ｆｉ` name the same entry.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    max_surface_chars: usize,
}

impl Lexicon {
    /// Parse a lexicon TOML file:
    ///
    /// ```toml
    /// [[entries]]
    /// surface = "今日"
    /// reading = "キョウ"
    /// pron = "キョー"   # optional, defaults to reading
    /// ```
    pub fn parse_toml(toml_str: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile =
            toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

        let mut lexicon = Lexicon::default();
        for (i, raw) in file.entries.into_iter().enumerate() {
            if raw.surface.is_empty() {
                return Err(LexiconError::EmptySurface(i));
            }
            let pron = raw.pron.unwrap_or_else(|| raw.reading.clone());
            for kana in [&raw.reading, &pron] {
                if !is_katakana_reading(kana) {
                    return Err(LexiconError::InvalidReading {
                        surface: raw.surface.clone(),
                        reading: kana.clone(),
                    });
                }
            }
            let surface = to_full_width(&raw.surface);
            if lexicon.entries.contains_key(&surface) {
                return Err(LexiconError::Duplicate(raw.surface));
            }
            lexicon.max_surface_chars = lexicon.max_surface_chars.max(surface.chars().count());
            lexicon.entries.insert(
                surface,
                LexiconEntry {
                    reading: raw.reading,
                    pron,
                },
            );
        }
        Ok(lexicon)
    }

    /// Load a lexicon from a TOML file on disk.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup by (width-folded) surface.
    pub fn get(&self, surface: &str) -> Option<&LexiconEntry> {
        self.entries.get(surface)
    }

    /// Longest entry that is a prefix of `chars`, with its length in chars.
    pub fn longest_match(&self, chars: &[char]) -> Option<(usize, &LexiconEntry)> {
        let longest = self.max_surface_chars.min(chars.len());
        (1..=longest).rev().find_map(|len| {
            let key: String = chars[..len].iter().collect();
            self.entries.get(&key).map(|entry| (len, entry))
        })
    }
}
