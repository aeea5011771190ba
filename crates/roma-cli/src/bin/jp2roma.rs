#[cfg(feature = "trace")]
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use roma_cli::commands::{self, config_ops, convert_ops, rename_ops};
use roma_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(
    name = "jp2roma",
    about = "Rename Japanese-named audio files to romanized ASCII names"
)]
struct Cli {
    /// Lexicon TOML with readings for kanji words
    #[arg(long, global = true)]
    lexicon: Option<String>,
    /// Custom settings TOML (see settings-export)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom kana phoneme table TOML (see phonemes-export)
    #[arg(long, global = true)]
    phonemes: Option<String>,
    /// Log conversion details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Directory for a JSONL trace file
    #[cfg(feature = "trace")]
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to romanized tokens
    Convert {
        /// Text to convert (one token per argument)
        #[arg(required = true)]
        texts: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show every stage of the conversion of one text
    Explain {
        /// Text to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the new names for the files in a folder without copying
    Preview {
        /// Folder with the audio files
        input_dir: String,
    },
    /// Copy the files in a folder under romanized names and write the mapping log
    Rename {
        /// Folder with the audio files
        input_dir: String,
        /// Folder to copy the renamed files into
        output_dir: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
        /// Copy the convertible files even if some stems fail to convert
        #[arg(long)]
        skip_failed: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export the default kana phoneme table as TOML
    PhonemesExport,
    /// Validate a lexicon TOML file
    LexiconValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "trace")]
    let _guard = init_tracing(cli.verbose, cli.trace_dir.as_deref());
    #[cfg(not(feature = "trace"))]
    let _guard = init_tracing(cli.verbose, None);

    commands::load_settings(cli.settings.as_deref());
    let converter = || commands::build_converter(cli.lexicon.as_deref(), cli.phonemes.as_deref());

    match cli.command {
        Command::Convert { texts, json } => convert_ops::convert_cmd(&converter(), &texts, json),
        Command::Explain { text, json } => convert_ops::explain_cmd(&converter(), &text, json),
        Command::Preview { input_dir } => rename_ops::preview_cmd(&converter(), &input_dir),
        Command::Rename {
            input_dir,
            output_dir,
            yes,
            skip_failed,
        } => rename_ops::rename_cmd(&converter(), &input_dir, &output_dir, yes, skip_failed),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::PhonemesExport => config_ops::phonemes_export(),
        Command::LexiconValidate { file } => config_ops::lexicon_validate(&file),
    }
}
