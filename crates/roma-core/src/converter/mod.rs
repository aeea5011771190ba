//! Japanese text to romanized filename token.
//!
//! Strips parenthesized annotations, walks the front-end's features with a
//! running character offset and turns each span into phoneme tokens (ASCII
//! runs pass through verbatim). The collected sequence is trimmed, geminates
//! are resolved, and the joined token is capped at `max_token_len` characters.

pub mod explain;
#[cfg(test)]
pub(crate) mod testutil;
#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, warn};
use unicode_normalization::UnicodeNormalization;

use crate::frontend::{Feature, Frontend, FrontendError};
use crate::label::{labels_to_phonemes, LabelError};
use crate::phoneme::{resolve_geminates, trim_boundaries, BOUNDARY};
use crate::settings::{settings, ConvertSettings};
use crate::unicode::{is_half_width_alphanumeric, to_full_width};

/// What to do when a feature's surface does not match the source span it is
/// supposed to cover (after NFKC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanMismatchPolicy {
    /// Drop the feature from the output, log a warning, keep going.
    #[default]
    Skip,
    /// Fail the conversion with [`ConvertError::SpanMismatch`].
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Longest token kept before truncation.
    pub max_token_len: usize,
    /// Appended after truncating.
    pub truncation_marker: String,
    pub span_mismatch: SpanMismatchPolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_token_len: 40,
            truncation_marker: "#".to_string(),
            span_mismatch: SpanMismatchPolicy::Skip,
        }
    }
}

impl From<&ConvertSettings> for ConvertOptions {
    fn from(s: &ConvertSettings) -> Self {
        Self {
            max_token_len: s.max_token_len,
            truncation_marker: s.truncation_marker.clone(),
            span_mismatch: s.span_mismatch,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("'{0}' has no analyzable content")]
    NoAnalyzableContent(String),

    #[error("malformed label from front-end: {0}")]
    MalformedLabel(#[from] LabelError),

    #[error("front-end surface {surface:?} does not match source {found:?} at offset {offset}")]
    SpanMismatch {
        offset: usize,
        surface: String,
        found: String,
    },

    #[error(transparent)]
    Frontend(#[from] FrontendError),
}

/// How a feature's span ended up in the phoneme sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanAction {
    /// Half-width alphanumerics, copied verbatim.
    Passthrough,
    /// Labelized and reduced to phonemes.
    Phonemized,
    /// The front-end had no labels; a boundary marker stands in.
    Placeholder,
    /// Surface and source disagreed; nothing was emitted.
    Skipped,
}

/// One feature after dispatch, with the source span it was matched against.
#[derive(Debug, Clone)]
pub(crate) struct FeatureStep {
    pub feature: Feature,
    pub start: usize,
    pub end: usize,
    pub source: String,
    pub action: SpanAction,
    pub tokens: Vec<String>,
}

fn annotation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[（(].*?[）)]").expect("annotation pattern must compile"))
}

/// Remove parenthesized annotations, half- or full-width, delimiters included.
pub fn strip_annotations(text: &str) -> String {
    annotation_pattern().replace_all(text, "").into_owned()
}

/// Whether a mismatched span differs from the surface only in width, as the
/// ASCII `!` NFKC makes of a full-width `！`.
fn is_width_variant(source: &str, surface: &str) -> bool {
    !source.is_empty() && to_full_width(source) == surface
}

/// Cap `token` at `max_len` characters, appending `marker` when it was cut.
pub fn cap_token(token: String, max_len: usize, marker: &str) -> String {
    if token.chars().count() <= max_len {
        return token;
    }
    let mut capped: String = token.chars().take(max_len).collect();
    capped.push_str(marker);
    capped
}

/// Text → romanized token converter around an injected front-end.
///
/// Holds no per-call state; one instance can serve any number of
/// conversions, from several threads if the front-end allows it.
#[derive(Debug, Clone)]
pub struct Converter<F> {
    frontend: F,
    options: ConvertOptions,
}

impl<F: Frontend> Converter<F> {
    /// Converter with options taken from the global settings.
    pub fn new(frontend: F) -> Self {
        Self::with_options(frontend, ConvertOptions::from(&settings().convert))
    }

    pub fn with_options(frontend: F, options: ConvertOptions) -> Self {
        Self { frontend, options }
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert `text` into a romanized token.
    ///
    /// Fails with [`ConvertError::NoAnalyzableContent`] when nothing is left
    /// after trimming, e.g. for empty input or input that is entirely a
    /// parenthesized annotation.
    pub fn convert(&self, text: &str) -> Result<String, ConvertError> {
        let _span = debug_span!("convert", text).entered();

        let cleaned = strip_annotations(text);
        let raw: Vec<String> = self
            .walk(&cleaned)?
            .into_iter()
            .flat_map(|step| step.tokens)
            .collect();
        self.finish(&cleaned, &raw)
    }

    /// Trim, resolve, join and cap a raw phoneme sequence.
    pub(crate) fn finish(&self, cleaned: &str, raw: &[String]) -> Result<String, ConvertError> {
        let trimmed = trim_boundaries(raw);
        let resolved = resolve_geminates(trimmed);
        debug!(
            raw = raw.len(),
            trimmed = trimmed.len(),
            resolved = resolved.len()
        );

        if resolved.is_empty() {
            return Err(ConvertError::NoAnalyzableContent(cleaned.to_string()));
        }
        Ok(cap_token(
            resolved.concat(),
            self.options.max_token_len,
            &self.options.truncation_marker,
        ))
    }

    /// Analyze `text` and dispatch every feature against its source span.
    ///
    /// The offset advances by each feature's surface length whatever branch
    /// is taken, so one bad feature cannot shift the spans after it.
    pub(crate) fn walk(&self, text: &str) -> Result<Vec<FeatureStep>, ConvertError> {
        let chars: Vec<char> = text.chars().collect();
        let features = self.frontend.analyze(text)?;
        debug!(features = features.len(), chars = chars.len());

        let mut steps = Vec::with_capacity(features.len());
        let mut offset = 0;

        for mut feature in features {
            let len = feature.surface_len();
            let start = offset.min(chars.len());
            let end = (offset + len).min(chars.len());
            let source: String = chars[start..end].iter().collect::<String>().nfkc().collect();

            let (action, tokens) = if is_half_width_alphanumeric(&source) {
                (SpanAction::Passthrough, vec![source.clone()])
            } else if source == feature.surface {
                feature.pronunciation = feature.reading.clone();
                let labels = self.frontend.labelize(std::slice::from_ref(&feature))?;
                if labels.is_empty() {
                    (SpanAction::Placeholder, vec![BOUNDARY.to_string()])
                } else {
                    (SpanAction::Phonemized, labels_to_phonemes(&labels)?)
                }
            } else {
                match self.options.span_mismatch {
                    SpanMismatchPolicy::Skip => {
                        if is_width_variant(&source, &feature.surface) {
                            debug!(
                                offset,
                                surface = %feature.surface,
                                found = %source,
                                "width-folded span, skipping"
                            );
                        } else {
                            warn!(
                                offset,
                                surface = %feature.surface,
                                found = %source,
                                "feature does not match source span, skipping"
                            );
                        }
                        (SpanAction::Skipped, Vec::new())
                    }
                    SpanMismatchPolicy::Error => {
                        return Err(ConvertError::SpanMismatch {
                            offset,
                            surface: feature.surface,
                            found: source,
                        });
                    }
                }
            };

            offset += len;
            steps.push(FeatureStep {
                feature,
                start,
                end,
                source,
                action,
                tokens,
            });
        }

        Ok(steps)
    }
}
