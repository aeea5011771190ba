//! Command implementations for `jp2roma`. Errors are reported on stderr and
//! exit the process with status 1.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod rename_ops;

use std::fs;
use std::path::Path;

use roma_core::frontend::{KanaFrontend, Lexicon, PhonemeTable};
use roma_core::Converter;

/// Install a custom settings file. Must run before anything reads settings.
pub fn load_settings(path: Option<&str>) {
    if let Some(path) = path {
        let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
        die!(
            roma_core::settings::init_custom(content),
            "Error in settings {path}: {}"
        );
    }
}

/// Converter over the bundled kana front-end, with optional lexicon and
/// phoneme table files.
pub fn build_converter(lexicon: Option<&str>, phonemes: Option<&str>) -> Converter<KanaFrontend> {
    let lexicon = match lexicon {
        Some(path) => die!(
            Lexicon::open(Path::new(path)),
            "Error loading lexicon {path}: {}"
        ),
        None => Lexicon::default(),
    };
    let phonemes = match phonemes {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(
                PhonemeTable::from_toml(&content),
                "Error in phoneme table {path}: {}"
            )
        }
        None => PhonemeTable::default(),
    };
    tracing::debug!(
        lexicon = lexicon.len(),
        phonemes = phonemes.len(),
        "front-end loaded"
    );
    Converter::new(KanaFrontend::new(lexicon, phonemes))
}
