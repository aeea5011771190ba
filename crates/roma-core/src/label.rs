//! Full-context label parsing.
//!
//! Labels follow the HTS convention `p1^p2-p3+p4=p5/A:...`. Only the current
//! phoneme `p3` is read: the text between the first `-` and the next `+`.

/// A front-end label that does not follow the `...-PHONEME+...` grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    #[error("label has no '-' before the phoneme: {0:?}")]
    MissingMinus(String),
    #[error("label has no '+' after the phoneme: {0:?}")]
    MissingPlus(String),
    #[error("label has an empty phoneme: {0:?}")]
    EmptyPhoneme(String),
}

/// Borrowed view of one parsed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    /// Everything before the first `-` (`p1^p2`).
    pub before: &'a str,
    /// The current phoneme, as written by the front-end.
    pub phoneme: &'a str,
    /// Everything after the `+` that closes the phoneme.
    pub after: &'a str,
}

impl<'a> Label<'a> {
    pub fn parse(label: &'a str) -> Result<Self, LabelError> {
        let (before, rest) = label
            .split_once('-')
            .ok_or_else(|| LabelError::MissingMinus(label.to_string()))?;
        let (phoneme, after) = rest
            .split_once('+')
            .ok_or_else(|| LabelError::MissingPlus(label.to_string()))?;
        if phoneme.is_empty() {
            return Err(LabelError::EmptyPhoneme(label.to_string()));
        }
        Ok(Label {
            before,
            phoneme,
            after,
        })
    }
}

/// Extract lower-cased phonemes from a label sequence.
///
/// The first and last labels stand for the utterance-initial and -final
/// silences and are dropped without being parsed, so sequences of two labels
/// or fewer yield nothing.
pub fn labels_to_phonemes<S: AsRef<str>>(labels: &[S]) -> Result<Vec<String>, LabelError> {
    if labels.len() <= 2 {
        return Ok(Vec::new());
    }
    labels[1..labels.len() - 1]
        .iter()
        .map(|label| Label::parse(label.as_ref()).map(|l| l.phoneme.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hts_label() {
        let label = Label::parse("xx^sil-m+o=cl/A:-2+1+3/B:xx-xx_xx").unwrap();
        assert_eq!(label.before, "xx^sil");
        assert_eq!(label.phoneme, "m");
        assert_eq!(label.after, "o=cl/A:-2+1+3/B:xx-xx_xx");
    }

    #[test]
    fn parse_short_label() {
        let label = Label::parse("a-N+k").unwrap();
        assert_eq!(label.phoneme, "N");
    }

    #[test]
    fn parse_rejects_missing_delimiters() {
        assert_eq!(
            Label::parse("sil"),
            Err(LabelError::MissingMinus("sil".to_string()))
        );
        assert_eq!(
            Label::parse("xx^xx-sil"),
            Err(LabelError::MissingPlus("xx^xx-sil".to_string()))
        );
        assert_eq!(
            Label::parse("a-+b"),
            Err(LabelError::EmptyPhoneme("a-+b".to_string()))
        );
    }

    #[test]
    fn extract_drops_first_and_last() {
        let labels = [
            "xx^xx-sil+m=o",
            "xx^sil-m+o=cl",
            "sil^m-o+cl=t",
            "m^o-cl+t=o",
            "o^cl-t+o=sil",
            "cl^t-o+sil=xx",
            "t^o-sil+xx=xx",
        ];
        assert_eq!(
            labels_to_phonemes(&labels).unwrap(),
            vec!["m", "o", "cl", "t", "o"]
        );
    }

    #[test]
    fn extract_lowercases() {
        let labels = ["x-sil+a", "x-s+e", "x-e+N", "x-N+sil", "x-sil+x"];
        assert_eq!(labels_to_phonemes(&labels).unwrap(), vec!["s", "e", "n"]);
    }

    #[test]
    fn extract_short_sequences_are_empty() {
        let none: [&str; 0] = [];
        assert!(labels_to_phonemes(&none).unwrap().is_empty());
        assert!(labels_to_phonemes(&["x-sil+x"]).unwrap().is_empty());
        assert!(labels_to_phonemes(&["x-sil+x", "x-sil+x"]).unwrap().is_empty());
    }

    #[test]
    fn extract_ignores_malformed_edges() {
        let labels = ["sil", "x-a+x", "sil"];
        assert_eq!(labels_to_phonemes(&labels).unwrap(), vec!["a"]);
    }

    #[test]
    fn extract_reports_malformed_interior() {
        let labels = ["x-sil+x", "broken", "x-sil+x"];
        assert!(matches!(
            labels_to_phonemes(&labels),
            Err(LabelError::MissingMinus(l)) if l == "broken"
        ));
    }
}
