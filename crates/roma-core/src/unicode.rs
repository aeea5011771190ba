//! Character-level Unicode classification for Japanese text.

use unicode_normalization::UnicodeNormalization;

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー (U+30FC) and the middle dot ・ (U+30FB).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK unified ideographs (BMP, extension A and B) plus the iteration mark 々.
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
        || c == '々'
}

/// Full-width Latin letters and digits (U+FF10..U+FF19, U+FF21..U+FF3A, U+FF41..U+FF5A).
pub fn is_full_width_alphanumeric(c: char) -> bool {
    matches!(c, '０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ')
}

/// True iff `s` is non-empty and made only of half-width ASCII letters and
/// digits. Full-width forms, kana and every other non-ASCII character fail.
pub fn is_half_width_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Half-width katakana and punctuation (U+FF61..U+FF9F), voicing marks included.
pub fn is_half_width_katakana(c: char) -> bool {
    ('\u{FF61}'..='\u{FF9F}').contains(&c)
}

/// Fold printable ASCII into its full-width form (U+FF01..U+FF5E) and the
/// ASCII space into the ideographic space U+3000. Half-width katakana runs
/// become full-width katakana, with ﾞ/ﾟ composed onto the preceding kana
/// (so `ｶﾞ` folds to the single `ガ`). Everything else is kept.
pub fn to_full_width(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut kana = String::new();
    for c in s.chars() {
        if is_half_width_katakana(c) {
            kana.push(c);
            continue;
        }
        if !kana.is_empty() {
            out.extend(kana.nfkc());
            kana.clear();
        }
        out.push(match c {
            ' ' => '\u{3000}',
            '!'..='~' => char::from_u32(c as u32 + 0xFEE0).unwrap_or(c),
            _ => c,
        });
    }
    out.extend(kana.nfkc());
    out
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' | '\u{309D}'..='\u{309E}' => {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Check if a string is a valid katakana reading: non-empty, katakana block
/// only (so ー is accepted, hiragana and ASCII are not).
pub fn is_katakana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_katakana(c) && c != '・')
}
