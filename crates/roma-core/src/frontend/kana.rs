use tracing::debug;

use crate::phoneme::PAUSE;
use crate::unicode::{
    hiragana_to_katakana, is_full_width_alphanumeric, is_hiragana, is_kanji, is_katakana,
    to_full_width,
};

use super::{Feature, Frontend, FrontendError, Lexicon, PhonemeTable};

/// Reading used for spans the front-end cannot read.
const UNKNOWN_READING: &str = "*";
const SILENCE: &str = "sil";
const NO_CONTEXT: &str = "xx";

const DIGIT_READINGS: [&str; 10] = [
    "ゼロ", "イチ", "ニ", "サン", "ヨン", "ゴ", "ロク", "ナナ", "ハチ", "キュウ",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Hiragana,
    Katakana,
    Alphanumeric,
    Kanji,
    Other,
}

fn classify(c: char) -> CharClass {
    if is_hiragana(c) {
        CharClass::Hiragana
    } else if is_katakana(c) && c != '・' {
        CharClass::Katakana
    } else if is_full_width_alphanumeric(c) {
        CharClass::Alphanumeric
    } else if is_kanji(c) {
        CharClass::Kanji
    } else {
        CharClass::Other
    }
}

fn is_pause_mark(pron: &str) -> bool {
    matches!(pron, "、" | "。" | "，" | "．" | "？" | "！" | "…")
}

/// Kana front-end with an optional lexicon for kanji.
///
/// Input is width-folded the way OpenJTalk folds it (ASCII → full-width),
/// then segmented: longest lexicon match first, otherwise a maximal run of
/// one character class. Hiragana and katakana runs read as themselves,
/// full-width digit runs read digit by digit, punctuation reads as itself
/// and anything else is unknown (`*`), which labelizes to nothing.
#[derive(Debug, Clone, Default)]
pub struct KanaFrontend {
    lexicon: Lexicon,
    phonemes: PhonemeTable,
}

impl KanaFrontend {
    pub fn new(lexicon: Lexicon, phonemes: PhonemeTable) -> Self {
        Self { lexicon, phonemes }
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self::new(lexicon, PhonemeTable::default())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn read_run(class: CharClass, surface: &str) -> String {
        match class {
            CharClass::Hiragana => hiragana_to_katakana(surface),
            CharClass::Katakana => surface.to_string(),
            CharClass::Alphanumeric if surface.chars().all(|c| ('０'..='９').contains(&c)) => {
                surface
                    .chars()
                    .map(|c| DIGIT_READINGS[(c as u32 - '０' as u32) as usize])
                    .collect()
            }
            CharClass::Other if is_pause_mark(surface) => surface.to_string(),
            _ => UNKNOWN_READING.to_string(),
        }
    }

    fn segment(&self, text: &str) -> Vec<Feature> {
        let chars: Vec<char> = to_full_width(text).chars().collect();
        let mut features = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if let Some((len, entry)) = self.lexicon.longest_match(&chars[i..]) {
                let surface: String = chars[i..i + len].iter().collect();
                features.push(Feature::new(surface, &entry.reading, &entry.pron));
                i += len;
                continue;
            }

            let class = classify(chars[i]);
            let mut end = i + 1;
            if class != CharClass::Other {
                while end < chars.len()
                    && classify(chars[end]) == class
                    && self.lexicon.longest_match(&chars[end..]).is_none()
                {
                    end += 1;
                }
            }

            let surface: String = chars[i..end].iter().collect();
            let reading = Self::read_run(class, &surface);
            features.push(Feature::new(surface, reading.clone(), reading));
            i = end;
        }

        features
    }
}

/// HTS-style `p1^p2-p3+p4=p5` labels with silences at both ends.
fn full_context_labels(phonemes: &[String]) -> Vec<String> {
    let mut padded: Vec<&str> = Vec::with_capacity(phonemes.len() + 2);
    padded.push(SILENCE);
    padded.extend(phonemes.iter().map(String::as_str));
    padded.push(SILENCE);

    let at = |i: usize, back: usize, ahead: usize| -> String {
        (i + ahead)
            .checked_sub(back)
            .and_then(|j| padded.get(j))
            .copied()
            .unwrap_or(NO_CONTEXT)
            .to_string()
    };

    (0..padded.len())
        .map(|i| {
            format!(
                "{}^{}-{}+{}={}",
                at(i, 2, 0),
                at(i, 1, 0),
                at(i, 0, 0),
                at(i, 0, 1),
                at(i, 0, 2)
            )
        })
        .collect()
}

impl Frontend for KanaFrontend {
    fn analyze(&self, text: &str) -> Result<Vec<Feature>, FrontendError> {
        let features = self.segment(text);
        debug!(features = features.len(), "kana analysis");
        Ok(features)
    }

    fn labelize(&self, features: &[Feature]) -> Result<Vec<String>, FrontendError> {
        let mut phonemes: Vec<String> = Vec::new();
        for feature in features {
            let pron = hiragana_to_katakana(&feature.pronunciation);
            if is_pause_mark(&pron) {
                if phonemes.last().is_some_and(|p| p != PAUSE) {
                    phonemes.push(PAUSE.to_string());
                }
                continue;
            }
            if let Some(mapped) = self.phonemes.to_phonemes(&pron) {
                phonemes.extend(mapped);
            }
        }
        while phonemes.last().is_some_and(|p| p == PAUSE) {
            phonemes.pop();
        }

        if phonemes.is_empty() {
            return Ok(Vec::new());
        }
        Ok(full_context_labels(&phonemes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::labels_to_phonemes;

    fn frontend() -> KanaFrontend {
        let lexicon = Lexicon::parse_toml(
            r#"
[[entries]]
surface = "使え"
reading = "ツカエ"

[[entries]]
surface = "秒"
reading = "ビョウ"
"#,
        )
        .unwrap();
        KanaFrontend::with_lexicon(lexicon)
    }

    fn surfaces(features: &[Feature]) -> Vec<&str> {
        features.iter().map(|f| f.surface.as_str()).collect()
    }

    fn phonemes_of(fe: &KanaFrontend, pron: &str) -> Vec<String> {
        let feature = Feature::new(pron, pron, pron);
        let labels = fe.labelize(&[feature]).unwrap();
        labels_to_phonemes(&labels).unwrap()
    }

    #[test]
    fn segment_by_class_and_lexicon() {
        let fe = frontend();
        let features = fe.analyze("WiFiが使えません").unwrap();
        assert_eq!(surfaces(&features), vec!["ＷｉＦｉ", "が", "使え", "ません"]);
        assert_eq!(features[1].reading, "ガ");
        assert_eq!(features[2].reading, "ツカエ");
        assert_eq!(features[3].reading, "マセン");
    }

    #[test]
    fn segment_punctuation_individually() {
        let fe = frontend();
        let features = fe.analyze("3、4、スタート！").unwrap();
        assert_eq!(
            surfaces(&features),
            vec!["３", "、", "４", "、", "スタート", "！"]
        );
        assert_eq!(features[0].reading, "サン");
        assert_eq!(features[1].reading, "、");
    }

    #[test]
    fn segment_unknown_kanji() {
        let fe = frontend();
        let features = fe.analyze("全部").unwrap();
        assert_eq!(surfaces(&features), vec!["全部"]);
        assert_eq!(features[0].reading, "*");
        assert!(fe.labelize(&features).unwrap().is_empty());
    }

    #[test]
    fn segment_run_stops_at_lexicon_entry() {
        let fe = frontend();
        let features = fe.analyze("四十秒").unwrap();
        assert_eq!(surfaces(&features), vec!["四十", "秒"]);
    }

    #[test]
    fn segment_empty_text() {
        assert!(frontend().analyze("").unwrap().is_empty());
    }

    #[test]
    fn labels_have_silence_edges() {
        let fe = frontend();
        let labels = fe.labelize(&[Feature::new("もっと", "モット", "モット")]).unwrap();
        assert_eq!(
            labels,
            vec![
                "xx^xx-sil+m=o",
                "xx^sil-m+o=cl",
                "sil^m-o+cl=t",
                "m^o-cl+t=o",
                "o^cl-t+o=sil",
                "cl^t-o+sil=xx",
                "t^o-sil+xx=xx",
            ]
        );
    }

    #[test]
    fn labelize_hiragana_pronunciation() {
        let fe = frontend();
        assert_eq!(phonemes_of(&fe, "もっと"), vec!["m", "o", "cl", "t", "o"]);
    }

    #[test]
    fn labelize_lone_punctuation_is_empty() {
        let fe = frontend();
        assert!(fe.labelize(&[Feature::new("、", "、", "、")]).unwrap().is_empty());
    }

    #[test]
    fn labelize_pause_between_features() {
        let fe = frontend();
        let features = [
            Feature::new("それと", "ソレト", "ソレト"),
            Feature::new("、", "、", "、"),
            Feature::new("これ", "コレ", "コレ"),
            Feature::new("。", "。", "。"),
        ];
        let labels = fe.labelize(&features).unwrap();
        assert_eq!(
            labels_to_phonemes(&labels).unwrap(),
            vec!["s", "o", "r", "e", "t", "o", "pau", "k", "o", "r", "e"]
        );
    }

    #[test]
    fn labelize_n_and_long_vowel() {
        let fe = frontend();
        assert_eq!(phonemes_of(&fe, "マセン"), vec!["m", "a", "s", "e", "n"]);
        assert_eq!(phonemes_of(&fe, "アート"), vec!["a", "a", "t", "o"]);
    }
}
