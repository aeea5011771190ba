//! Phoneme-sequence normalization: edge trimming and geminate resolution.

/// Boundary / silence placeholder.
pub const BOUNDARY: &str = "_";
/// Geminate (sokuon) marker emitted for ッ.
pub const GEMINATE: &str = "cl";
/// Short pause between phrases.
pub const PAUSE: &str = "pau";

fn is_edge_marker(token: &str) -> bool {
    token == BOUNDARY || token == GEMINATE
}

/// Strip boundary and geminate markers from both ends of `tokens`.
///
/// Only the leading and trailing runs are removed; markers between two
/// ordinary tokens are kept. Returns a sub-slice, so trimming twice is the
/// same as trimming once.
pub fn trim_boundaries<S: AsRef<str>>(tokens: &[S]) -> &[S] {
    let mut start = 0;
    let mut end = tokens.len();
    while start < end && is_edge_marker(tokens[start].as_ref()) {
        start += 1;
    }
    while start < end && is_edge_marker(tokens[end - 1].as_ref()) {
        end -= 1;
    }
    &tokens[start..end]
}

/// Replace every geminate marker with the first character of the token that
/// follows it (`m o cl t o` → `m o t t o`). A marker in last position has no
/// consonant to double and is dropped.
pub fn resolve_geminates<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut resolved = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if token != GEMINATE {
            resolved.push(token.to_string());
            continue;
        }
        if let Some(onset) = tokens.get(i + 1).and_then(|next| next.as_ref().chars().next()) {
            resolved.push(onset.to_string());
        }
    }
    resolved
}
