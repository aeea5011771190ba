use std::fs;
use std::path::Path;

use roma_core::frontend::{Lexicon, DEFAULT_PHONEMES_TOML};

pub fn settings_export() {
    print!("{}", roma_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        roma_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: convert.max_token_len={}, convert.span_mismatch={:?}, batch.extensions={:?}",
        s.convert.max_token_len, s.convert.span_mismatch, s.batch.extensions
    );
}

pub fn phonemes_export() {
    print!("{DEFAULT_PHONEMES_TOML}");
}

pub fn lexicon_validate(file: &str) {
    let lexicon = die!(Lexicon::open(Path::new(file)), "Error: {}");
    println!("OK: {} entries", lexicon.len());
}
