use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::phoneme::GEMINATE;
use crate::unicode::is_katakana;

pub const DEFAULT_PHONEMES_TOML: &str = include_str!("kana_phonemes.toml");

const VOWELS: [&str; 5] = ["a", "i", "u", "e", "o"];
const LONG_VOWEL_MARK: char = 'ー';
const SOKUON: char = 'ッ';

#[derive(Deserialize)]
struct PhonemeConfig {
    phonemes: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PhonemeTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[phonemes] table is empty")]
    Empty,
    #[error("key must be one or two katakana: {0}")]
    InvalidKey(String),
    #[error("empty phoneme list for key: {0}")]
    EmptyValue(String),
    #[error("non-ASCII phoneme for key {key}: {value}")]
    NonAsciiValue { key: String, value: String },
}

/// Katakana mora → phoneme mapping, matched longest-first.
#[derive(Debug, Clone)]
pub struct PhonemeTable {
    map: HashMap<String, Vec<String>>,
    max_key_chars: usize,
}

impl PhonemeTable {
    /// Parse a `[phonemes]` TOML table (`"キャ" = "ky a"`).
    pub fn from_toml(toml_str: &str) -> Result<Self, PhonemeTableError> {
        let config: PhonemeConfig =
            toml::from_str(toml_str).map_err(|e| PhonemeTableError::Parse(e.to_string()))?;

        if config.phonemes.is_empty() {
            return Err(PhonemeTableError::Empty);
        }

        let mut map = HashMap::with_capacity(config.phonemes.len());
        let mut max_key_chars = 0;
        for (key, value) in config.phonemes {
            let key_chars = key.chars().count();
            if !(1..=2).contains(&key_chars) || !key.chars().all(is_katakana) {
                return Err(PhonemeTableError::InvalidKey(key));
            }
            if !value.is_ascii() {
                return Err(PhonemeTableError::NonAsciiValue { key, value });
            }
            let phonemes: Vec<String> = value.split_whitespace().map(str::to_string).collect();
            if phonemes.is_empty() {
                return Err(PhonemeTableError::EmptyValue(key));
            }
            max_key_chars = max_key_chars.max(key_chars);
            map.insert(key, phonemes);
        }

        Ok(Self { map, max_key_chars })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Phonemes for one exact mora key, if mapped.
    pub fn get(&self, mora: &str) -> Option<&[String]> {
        self.map.get(mora).map(Vec::as_slice)
    }

    /// Convert a katakana pronunciation into phonemes.
    ///
    /// ッ becomes the geminate marker and ー repeats the preceding vowel
    /// (dropped when there is none). Returns `None` as soon as a character
    /// cannot be mapped, so non-kana pronunciations contribute nothing.
    pub fn to_phonemes(&self, pronunciation: &str) -> Option<Vec<String>> {
        let chars: Vec<char> = pronunciation.chars().collect();
        let mut phonemes: Vec<String> = Vec::with_capacity(chars.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                LONG_VOWEL_MARK => {
                    let vowel = phonemes
                        .last()
                        .filter(|p| VOWELS.contains(&p.as_str()))
                        .cloned();
                    phonemes.extend(vowel);
                    i += 1;
                    continue;
                }
                SOKUON if self.get("ッ").is_none() => {
                    phonemes.push(GEMINATE.to_string());
                    i += 1;
                    continue;
                }
                _ => {}
            }

            let longest = self.max_key_chars.min(chars.len() - i);
            let (len, mapped) = (1..=longest).rev().find_map(|len| {
                let key: String = chars[i..i + len].iter().collect();
                self.get(&key).map(|p| (len, p))
            })?;
            phonemes.extend_from_slice(mapped);
            i += len;
        }

        Some(phonemes)
    }
}

impl Default for PhonemeTable {
    fn default() -> Self {
        Self::from_toml(DEFAULT_PHONEMES_TOML).expect("embedded phoneme table must be valid")
    }
}
