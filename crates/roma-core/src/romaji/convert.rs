use super::table::{LookupResult, RomajiTable};

fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Longest exact key starting at `chars[0]`, walking forward while the
/// table still reports a prefix.
fn longest_match<'a>(table: &'a RomajiTable, chars: &[char]) -> Option<(usize, &'a str)> {
    let mut key = String::new();
    let mut best = None;
    for (n, &c) in chars.iter().enumerate() {
        if !c.is_ascii_lowercase() {
            break;
        }
        key.push(c);
        match table.lookup(&key) {
            LookupResult::None => break,
            LookupResult::Prefix => {}
            LookupResult::Exact(kana) => return Some((n + 1, kana)),
            LookupResult::ExactAndPrefix(kana) => best = Some((n + 1, kana)),
        }
    }
    best
}

/// Render a romanized token as hiragana, for display next to it.
///
/// The token is lower-cased first. A doubled consonant (other than `n`)
/// becomes っ, a lone `n` with no matching syllable becomes ん, and anything
/// the table cannot read (digits, `_`, `#`, stray letters) is kept as is.
pub fn to_hiragana(token: &str) -> String {
    to_hiragana_with(RomajiTable::global(), token)
}

pub(crate) fn to_hiragana_with(table: &RomajiTable, token: &str) -> String {
    let chars: Vec<char> = token.to_lowercase().chars().collect();
    let mut out = String::with_capacity(token.len() * 3);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c != 'n' && is_consonant(c) && chars.get(i + 1) == Some(&c) {
            out.push('っ');
            i += 1;
            continue;
        }

        if let Some((len, kana)) = longest_match(table, &chars[i..]) {
            out.push_str(kana);
            i += len;
            continue;
        }

        out.push(if c == 'n' { 'ん' } else { c });
        i += 1;
    }

    out
}
