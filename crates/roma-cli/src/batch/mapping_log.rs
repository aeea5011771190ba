use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use roma_core::romaji::to_hiragana;
use unicode_width::UnicodeWidthStr;

use super::RenameEntry;

/// Display width every log column is padded to.
pub const LOG_COLUMN_WIDTH: usize = 40;

const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Pad `s` to `width` display columns with full-width spaces, finishing
/// with one ASCII space when the gap is odd. Wider strings are left alone.
pub fn pad_full_width(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(UnicodeWidthStr::width(s));
    let mut out = String::with_capacity(s.len() + gap / 2 * 3 + 1);
    out.push_str(s);
    out.extend(std::iter::repeat(IDEOGRAPHIC_SPACE).take(gap / 2));
    if gap % 2 == 1 {
        out.push(' ');
    }
    out
}

/// Pad `s` to `width` display columns with ASCII spaces.
pub fn pad_ascii(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(gap))
}

/// `<stem> -> <token> -> <hiragana>`, each column padded to
/// [`LOG_COLUMN_WIDTH`].
pub fn format_log_line(stem: &str, token: &str, hiragana: &str) -> String {
    format!(
        "{} -> {} -> {}",
        pad_full_width(stem, LOG_COLUMN_WIDTH),
        pad_ascii(token, LOG_COLUMN_WIDTH),
        pad_full_width(hiragana, LOG_COLUMN_WIDTH)
    )
}

/// Write one line per entry to `path`, replacing any previous log.
pub fn write_log(path: &Path, entries: &[RenameEntry]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for entry in entries {
        let hiragana = to_hiragana(&entry.token);
        writeln!(w, "{}", format_log_line(&entry.stem, &entry.token, &hiragana))?;
    }
    w.flush()
}
