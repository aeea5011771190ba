//! Shared fixtures for converter tests.

use std::sync::Mutex;

use crate::frontend::{Feature, Frontend, FrontendError, KanaFrontend, Lexicon};

use super::{ConvertOptions, Converter};

const TEST_LEXICON: &str = r#"
[[entries]]
surface = "今日"
reading = "キョウ"
pron = "キョー"

[[entries]]
surface = "良い"
reading = "ヨイ"

[[entries]]
surface = "天気"
reading = "テンキ"

[[entries]]
surface = "前"
reading = "マエ"

[[entries]]
surface = "後ろ"
reading = "ウシロ"

[[entries]]
surface = "使え"
reading = "ツカエ"

[[entries]]
surface = "言っ"
reading = "イッ"

[[entries]]
surface = "秒"
reading = "ビョウ"
pron = "ビョー"

[[entries]]
surface = "秒速"
reading = "ビョウソク"

[[entries]]
surface = "何"
reading = "ナニ"

[[entries]]
surface = "万"
reading = "マン"
"#;

pub fn test_lexicon() -> Lexicon {
    Lexicon::parse_toml(TEST_LEXICON).unwrap()
}

pub fn test_converter() -> Converter<KanaFrontend> {
    Converter::with_options(
        KanaFrontend::with_lexicon(test_lexicon()),
        ConvertOptions::default(),
    )
}

/// Front-end returning canned features and labels.
///
/// `labels` is indexed by feature surface; surfaces without an entry
/// labelize to nothing. Every `labelize` call is recorded.
#[derive(Default)]
pub struct FixedFrontend {
    pub features: Vec<Feature>,
    pub labels: Vec<(String, Vec<String>)>,
    pub calls: Mutex<Vec<Vec<Feature>>>,
}

impl FixedFrontend {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            ..Default::default()
        }
    }

    pub fn with_labels(mut self, surface: &str, labels: &[&str]) -> Self {
        self.labels.push((
            surface.to_string(),
            labels.iter().map(|l| l.to_string()).collect(),
        ));
        self
    }

    pub fn calls(&self) -> Vec<Vec<Feature>> {
        self.calls.lock().unwrap().clone()
    }
}

impl Frontend for FixedFrontend {
    fn analyze(&self, _text: &str) -> Result<Vec<Feature>, FrontendError> {
        Ok(self.features.clone())
    }

    fn labelize(&self, features: &[Feature]) -> Result<Vec<String>, FrontendError> {
        self.calls.lock().unwrap().push(features.to_vec());
        let labels = features
            .first()
            .and_then(|f| self.labels.iter().find(|(s, _)| *s == f.surface))
            .map(|(_, l)| l.clone())
            .unwrap_or_default();
        Ok(labels)
    }
}

/// Front-end whose analysis always fails.
pub struct FailingFrontend;

impl Frontend for FailingFrontend {
    fn analyze(&self, _text: &str) -> Result<Vec<Feature>, FrontendError> {
        Err(FrontendError::Analysis("dictionary not loaded".to_string()))
    }

    fn labelize(&self, _features: &[Feature]) -> Result<Vec<String>, FrontendError> {
        Err(FrontendError::Labeling("dictionary not loaded".to_string()))
    }
}
