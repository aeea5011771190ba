//! Linguistic front-end seam.
//!
//! The converter talks to the front-end through [`Frontend`] only: one
//! `analyze` call per text, then one `labelize` call per feature. Any
//! analyzer that can produce surface/reading pairs and HTS-style labels can
//! be plugged in; [`KanaFrontend`] is the bundled kana + lexicon one.

mod kana;
mod lexicon;
mod phonemes;

pub use kana::KanaFrontend;
pub use lexicon::{Lexicon, LexiconEntry, LexiconError};
pub use phonemes::{PhonemeTable, PhonemeTableError, DEFAULT_PHONEMES_TOML};

use serde::Serialize;

/// One segment of analyzed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// The substring this feature covers, as the front-end saw it.
    pub surface: String,
    /// Phonetic reading (katakana).
    pub reading: String,
    /// Pronunciation used for label generation; the converter overwrites it
    /// with `reading` before labelizing.
    pub pronunciation: String,
}

impl Feature {
    pub fn new(
        surface: impl Into<String>,
        reading: impl Into<String>,
        pronunciation: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
            pronunciation: pronunciation.into(),
        }
    }

    /// Surface length in characters, which is what span tracking advances by.
    pub fn surface_len(&self) -> usize {
        self.surface.chars().count()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("text analysis failed: {0}")]
    Analysis(String),
    #[error("label generation failed: {0}")]
    Labeling(String),
}

/// The external linguistic front-end.
///
/// Implementations wrapping a library with global dictionary state must
/// serialize access themselves; the converter may be shared across threads.
pub trait Frontend: Send + Sync {
    /// Segment `text` into features whose surfaces tile it in order.
    fn analyze(&self, text: &str) -> Result<Vec<Feature>, FrontendError>;

    /// Produce full-context labels (`...-PHONEME+...`) for `features`,
    /// including the leading and trailing silence labels. An empty result
    /// means the features carry nothing pronounceable.
    fn labelize(&self, features: &[Feature]) -> Result<Vec<String>, FrontendError>;
}

impl<T: Frontend + ?Sized> Frontend for &T {
    fn analyze(&self, text: &str) -> Result<Vec<Feature>, FrontendError> {
        (**self).analyze(text)
    }

    fn labelize(&self, features: &[Feature]) -> Result<Vec<String>, FrontendError> {
        (**self).labelize(features)
    }
}

impl<T: Frontend + ?Sized> Frontend for Box<T> {
    fn analyze(&self, text: &str) -> Result<Vec<Feature>, FrontendError> {
        (**self).analyze(text)
    }

    fn labelize(&self, features: &[Feature]) -> Result<Vec<String>, FrontendError> {
        (**self).labelize(features)
    }
}
