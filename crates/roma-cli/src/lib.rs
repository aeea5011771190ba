//! Batch renaming of Japanese-named audio files to romanized names, and the
//! command implementations behind the `jp2roma` binary.

pub mod batch;
pub mod commands;
pub mod trace_init;
