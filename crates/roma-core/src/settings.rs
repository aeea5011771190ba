//! Global settings loaded from TOML, following the same OnceLock pattern as the romaji table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::converter::SpanMismatchPolicy;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub convert: ConvertSettings,
    pub batch: BatchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertSettings {
    pub max_token_len: usize,
    pub truncation_marker: String,
    #[serde(default)]
    pub span_mismatch: SpanMismatchPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    pub extensions: Vec<String>,
    pub log_file: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    fn invalid(field: &str, reason: &str) -> SettingsError {
        SettingsError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    if s.convert.max_token_len == 0 {
        return Err(invalid("convert.max_token_len", "must be positive"));
    }
    let marker = &s.convert.truncation_marker;
    if marker.is_empty() || !marker.is_ascii() {
        return Err(invalid(
            "convert.truncation_marker",
            "must be non-empty ASCII",
        ));
    }

    if s.batch.extensions.is_empty() {
        return Err(invalid("batch.extensions", "must list at least one extension"));
    }
    for ext in &s.batch.extensions {
        if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(SettingsError::InvalidValue {
                field: "batch.extensions".to_string(),
                reason: format!("{ext:?} is not a bare extension"),
            });
        }
    }
    if s.batch.log_file.is_empty() || s.batch.log_file.contains(['/', '\\']) {
        return Err(invalid("batch.log_file", "must be a plain file name"));
    }

    Ok(())
}
