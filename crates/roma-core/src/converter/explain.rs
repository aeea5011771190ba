//! Step-by-step trace of one conversion, for `jp2roma explain`.

use std::fmt::Write;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::frontend::Frontend;
use crate::phoneme::{resolve_geminates, trim_boundaries};

use super::{strip_annotations, Converter, SpanAction};

#[derive(Debug, Clone, Serialize)]
pub struct ExplainFeature {
    pub surface: String,
    pub reading: String,
    /// Character range of the cleaned text this feature was matched against.
    pub start: usize,
    pub end: usize,
    pub source: String,
    pub action: SpanAction,
    pub phonemes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub cleaned: String,
    pub features: Vec<ExplainFeature>,
    pub raw: Vec<String>,
    pub trimmed: Vec<String>,
    pub resolved: Vec<String>,
    pub token: Option<String>,
    pub error: Option<String>,
}

/// Run the conversion pipeline on `text`, keeping every intermediate stage.
///
/// Never fails: an error from any stage is recorded in `error` with the
/// stages reached so far.
pub fn explain<F: Frontend>(converter: &Converter<F>, text: &str) -> ExplainResult {
    let cleaned = strip_annotations(text);
    let mut result = ExplainResult {
        input: text.to_string(),
        cleaned: cleaned.clone(),
        features: Vec::new(),
        raw: Vec::new(),
        trimmed: Vec::new(),
        resolved: Vec::new(),
        token: None,
        error: None,
    };

    let steps = match converter.walk(&cleaned) {
        Ok(steps) => steps,
        Err(e) => {
            result.error = Some(e.to_string());
            return result;
        }
    };

    for step in steps {
        result.raw.extend(step.tokens.iter().cloned());
        result.features.push(ExplainFeature {
            surface: step.feature.surface,
            reading: step.feature.reading,
            start: step.start,
            end: step.end,
            source: step.source,
            action: step.action,
            phonemes: step.tokens,
        });
    }

    result.trimmed = trim_boundaries(&result.raw).to_vec();
    result.resolved = resolve_geminates(&result.trimmed);

    match converter.finish(&cleaned, &result.raw) {
        Ok(token) => result.token = Some(token),
        Err(e) => result.error = Some(e.to_string()),
    }
    result
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

fn action_label(action: SpanAction) -> &'static str {
    match action {
        SpanAction::Passthrough => "passthrough",
        SpanAction::Phonemized => "phonemized",
        SpanAction::Placeholder => "placeholder",
        SpanAction::Skipped => "skipped",
    }
}

/// Human-readable rendering with the feature table aligned on display width.
pub fn format_text(result: &ExplainResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "input:    {}", result.input);
    let _ = writeln!(out, "cleaned:  {}", result.cleaned);

    if !result.features.is_empty() {
        let surface_w = result
            .features
            .iter()
            .map(|f| UnicodeWidthStr::width(f.surface.as_str()))
            .max()
            .unwrap_or(0)
            .max("surface".len());
        let reading_w = result
            .features
            .iter()
            .map(|f| UnicodeWidthStr::width(f.reading.as_str()))
            .max()
            .unwrap_or(0)
            .max("reading".len());

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  {}  {}  {:<9}  {:<11}  phonemes",
            pad("surface", surface_w),
            pad("reading", reading_w),
            "span",
            "action"
        );
        for f in &result.features {
            let _ = writeln!(
                out,
                "  {}  {}  {:<9}  {:<11}  {}",
                pad(&f.surface, surface_w),
                pad(&f.reading, reading_w),
                format!("{}..{}", f.start, f.end),
                action_label(f.action),
                f.phonemes.join(" ")
            );
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "raw:      {}", result.raw.join(" "));
    let _ = writeln!(out, "trimmed:  {}", result.trimmed.join(" "));
    let _ = writeln!(out, "resolved: {}", result.resolved.join(" "));
    match (&result.token, &result.error) {
        (Some(token), _) => {
            let _ = writeln!(out, "token:    {token}");
        }
        (None, Some(err)) => {
            let _ = writeln!(out, "error:    {err}");
        }
        (None, None) => {}
    }
    out
}
