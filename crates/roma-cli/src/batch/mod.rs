//! Folder-level renaming: list audio files, convert every stem, resolve
//! name collisions, then copy under the new names and write the mapping log.

mod mapping_log;

pub use mapping_log::{format_log_line, pad_ascii, pad_full_width, write_log, LOG_COLUMN_WIDTH};

use std::collections::{HashMap, HashSet};
use std::fs;
use std::hash::Hash;
use std::io;
use std::path::{Path, PathBuf};

use roma_core::{ConvertError, Converter, Frontend};
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("{0} does not exist")]
    NotFound(PathBuf),
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BatchError {
    fn io(path: &Path, source: io::Error) -> Self {
        BatchError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A file whose stem could not be converted.
#[derive(Debug)]
pub struct FailedFile {
    pub path: PathBuf,
    pub stem: String,
    pub error: ConvertError,
}

/// One planned copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub source: PathBuf,
    pub stem: String,
    /// Converted stem, with a `_N` suffix when it collided with an earlier file.
    pub token: String,
    /// File name to create in the output folder.
    pub target_name: String,
}

#[derive(Debug, Default)]
pub struct RenamePlan {
    pub entries: Vec<RenameEntry>,
    pub failed: Vec<FailedFile>,
}

impl RenamePlan {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fail unless `path` exists and is a directory.
pub fn ensure_dir(path: &Path) -> Result<(), BatchError> {
    let meta = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BatchError::NotFound(path.to_path_buf()),
        _ => BatchError::io(path, e),
    })?;
    if !meta.is_dir() {
        return Err(BatchError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Whether `a` and `b` name the same directory.
pub fn same_dir(a: &Path, b: &Path) -> Result<bool, BatchError> {
    let a = fs::canonicalize(a).map_err(|e| BatchError::io(a, e))?;
    let b = fs::canonicalize(b).map_err(|e| BatchError::io(b, e))?;
    Ok(a == b)
}

/// Regular files directly inside `dir` whose extension is one of
/// `extensions` (case-sensitive), sorted by file name.
pub fn list_audio_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, BatchError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| BatchError::io(dir, e))? {
        let entry = entry.map_err(|e| BatchError::io(dir, e))?;
        let path = entry.path();
        let is_file = entry
            .file_type()
            .map_err(|e| BatchError::io(&path, e))?
            .is_file();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e == ext));
        if is_file && matches {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), files = files.len(), "listed audio files");
    Ok(files)
}

/// Indices of items sharing a key, one group per key with two or more
/// members. Groups are ordered by first appearance; indices ascend.
pub fn duplicate_groups<K: Eq + Hash>(keys: &[K]) -> Vec<Vec<usize>> {
    let mut by_key: HashMap<&K, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (i, key) in keys.iter().enumerate() {
        match by_key.get(key) {
            Some(&g) => groups[g].push(i),
            None => {
                by_key.insert(key, groups.len());
                groups.push(vec![i]);
            }
        }
    }
    groups.retain(|g| g.len() >= 2);
    groups
}

fn target_name(token: &str, source: &Path) -> String {
    match source.extension() {
        Some(ext) => format!("{token}.{}", ext.to_string_lossy()),
        None => token.to_string(),
    }
}

/// Give every entry a distinct target name.
///
/// Names are compared case-insensitively since the output folder may live on
/// a case-insensitive filesystem. Within a group of colliding entries the
/// first keeps its token; the rest get `_2`, `_3`, ... (skipping any suffix
/// that would collide again).
pub fn disambiguate(entries: &mut [RenameEntry]) {
    let keys: Vec<String> = entries
        .iter()
        .map(|e| e.target_name.to_lowercase())
        .collect();
    let mut taken: HashSet<String> = keys.iter().cloned().collect();

    for group in duplicate_groups(&keys) {
        let base = entries[group[0]].token.clone();
        let mut suffix = 2;
        for &idx in &group[1..] {
            let (token, name) = loop {
                let token = format!("{base}_{suffix}");
                let name = target_name(&token, &entries[idx].source);
                suffix += 1;
                if taken.insert(name.to_lowercase()) {
                    break (token, name);
                }
            };
            warn!(
                stem = %entries[idx].stem,
                token = %base,
                renamed = %token,
                "duplicate token, adding suffix"
            );
            entries[idx].token = token;
            entries[idx].target_name = name;
        }
    }
}

/// Convert the stem of every file. Nothing is written.
pub fn plan<F: Frontend>(converter: &Converter<F>, files: &[PathBuf]) -> RenamePlan {
    let mut plan = RenamePlan::default();
    for path in files {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        match converter.convert(&stem) {
            Ok(token) => {
                debug!(%stem, %token, "converted");
                plan.entries.push(RenameEntry {
                    source: path.clone(),
                    target_name: target_name(&token, path),
                    stem,
                    token,
                });
            }
            Err(error) => {
                warn!(%stem, %error, "conversion failed");
                plan.failed.push(FailedFile {
                    path: path.clone(),
                    stem,
                    error,
                });
            }
        }
    }
    disambiguate(&mut plan.entries);
    plan
}

/// Whether `target` already exists and is the same file as `source`.
fn is_same_file(source: &Path, target: &Path) -> Result<bool, BatchError> {
    if !target.exists() {
        return Ok(false);
    }
    let source = fs::canonicalize(source).map_err(|e| BatchError::io(source, e))?;
    let target = fs::canonicalize(target).map_err(|e| BatchError::io(target, e))?;
    Ok(source == target)
}

/// Copy every planned entry into `output_dir` and write the mapping log
/// there. Returns the number of files copied.
///
/// An entry whose target is its own source (output folder == input folder
/// and the stem was already ASCII) is left untouched: `fs::copy` would
/// truncate it before reading.
pub fn execute(plan: &RenamePlan, output_dir: &Path, log_file: &str) -> Result<usize, BatchError> {
    let mut copied = 0;
    for entry in &plan.entries {
        let target = output_dir.join(&entry.target_name);
        if is_same_file(&entry.source, &target)? {
            debug!(file = %target.display(), "already named, not copied");
            continue;
        }
        fs::copy(&entry.source, &target).map_err(|e| BatchError::io(&target, e))?;
        debug!(from = %entry.source.display(), to = %target.display(), "copied");
        copied += 1;
    }

    let log_path = output_dir.join(log_file);
    write_log(&log_path, &plan.entries).map_err(|e| BatchError::io(&log_path, e))?;
    info!(
        copied,
        planned = plan.entries.len(),
        log = %log_path.display(),
        "batch finished"
    );
    Ok(copied)
}
