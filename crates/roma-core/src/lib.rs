//! Japanese text to ASCII romanized filename tokens.
//!
//! The pipeline is: annotation stripping, front-end analysis, per-feature
//! phonemization, boundary trimming, geminate resolution, length capping.
//! See [`converter::Converter`] for the entry point.

pub mod converter;
pub mod frontend;
pub mod label;
pub mod phoneme;
pub mod romaji;
pub mod settings;
pub mod unicode;

pub use converter::{ConvertError, ConvertOptions, Converter, SpanMismatchPolicy};
pub use frontend::{Feature, Frontend, FrontendError, KanaFrontend};
