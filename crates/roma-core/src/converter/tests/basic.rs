use super::super::*;
use crate::converter::testutil::test_converter;

fn convert(text: &str) -> String {
    test_converter().convert(text).unwrap()
}

#[test]
fn test_convert_geminate() {
    assert_eq!(convert("もっと"), "motto");
}

#[test]
fn test_convert_comma_becomes_boundary() {
    assert_eq!(convert("それと、これ"), "soreto_kore");
}

#[test]
fn test_convert_ascii_passthrough() {
    assert_eq!(convert("WiFiが使えません"), "WiFigatsukaemasen");
}

#[test]
fn test_convert_digits_and_trailing_punctuation() {
    assert_eq!(convert("3、4、1、スタート！"), "3_4_1_sutaato");
}

#[test]
fn test_convert_long_vowel() {
    assert_eq!(convert("アート"), "aato");
}

#[test]
fn test_convert_trailing_question_mark() {
    assert_eq!(convert("あれ？"), "are");
}

#[test]
fn test_convert_leading_geminate_trimmed() {
    assert_eq!(convert("って言ってた"), "teitteta");
}

#[test]
fn test_convert_reading_not_pronunciation() {
    // 今日 is pronounced キョー but converted from its reading キョウ.
    assert_eq!(convert("今日は良い天気ですね"), "kyouhayoitenkidesune");
}

#[test]
fn test_convert_numbers_with_kanji() {
    assert_eq!(convert("45秒で何ができる？"), "45byoudenanigadekiru");
    assert_eq!(convert("秒速30万キロメートル"), "byousoku30mankiromeetoru");
}

#[test]
fn test_convert_okurigana_word() {
    assert_eq!(convert("前と後ろ"), "maetoushiro");
}

#[test]
fn test_convert_full_width_ascii_input() {
    assert_eq!(convert("ＷｉＦｉ"), "WiFi");
}

#[test]
fn test_convert_half_width_katakana_input() {
    assert_eq!(convert("ｱｰﾄ"), "aato");
    assert_eq!(convert("ﾓｯﾄ"), "motto");
}

#[test]
fn test_convert_strips_annotations() {
    assert_eq!(convert("もっと(テイク2)"), "motto");
    assert_eq!(convert("アート（仮）です"), "aatodesu");
}

#[test]
fn test_convert_empty_fails() {
    let err = test_converter().convert("").unwrap_err();
    assert!(matches!(err, ConvertError::NoAnalyzableContent(ref s) if s.is_empty()));
}

#[test]
fn test_convert_only_annotation_fails() {
    let err = test_converter().convert("（全部括弧）").unwrap_err();
    assert!(matches!(err, ConvertError::NoAnalyzableContent(_)));
}

#[test]
fn test_convert_only_punctuation_fails() {
    let err = test_converter().convert("、、").unwrap_err();
    assert!(matches!(err, ConvertError::NoAnalyzableContent(ref s) if s == "、、"));
}

#[test]
fn test_convert_unknown_kanji_fails() {
    // Kanji missing from the lexicon has no reading and contributes nothing.
    let err = test_converter().convert("全部").unwrap_err();
    assert!(matches!(err, ConvertError::NoAnalyzableContent(_)));
}

#[test]
fn test_convert_caps_long_token() {
    let token = convert(&"アイウエオ".repeat(10));
    assert_eq!(token.chars().count(), 41);
    assert!(token.ends_with('#'));
    assert_eq!(&token[..40], "aiueo".repeat(8));
}

#[test]
fn test_convert_exact_cap_not_marked() {
    let token = convert(&"アイウエオ".repeat(8));
    assert_eq!(token, "aiueo".repeat(8));
}

#[test]
fn test_convert_custom_cap() {
    let conv = Converter::with_options(
        test_converter().frontend().clone(),
        ConvertOptions {
            max_token_len: 4,
            truncation_marker: "~".to_string(),
            ..ConvertOptions::default()
        },
    );
    assert_eq!(conv.convert("もっと").unwrap(), "mott~");
}

#[test]
fn test_convert_is_repeatable() {
    let conv = test_converter();
    let first = conv.convert("今日は良い天気ですね").unwrap();
    let second = conv.convert("今日は良い天気ですね").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_strip_annotations() {
    assert_eq!(strip_annotations("abc(def)ghi"), "abcghi");
    assert_eq!(strip_annotations("a（注）b(x)c"), "abc");
    assert_eq!(strip_annotations("(a)b(c)"), "b");
    assert_eq!(strip_annotations("前（a)後"), "前後");
    assert_eq!(strip_annotations("(open"), "(open");
    assert_eq!(strip_annotations(""), "");
}

#[test]
fn test_cap_token() {
    assert_eq!(cap_token("abc".to_string(), 3, "#"), "abc");
    assert_eq!(cap_token("abcd".to_string(), 3, "#"), "abc#");
    assert_eq!(cap_token(String::new(), 3, "#"), "");
}
