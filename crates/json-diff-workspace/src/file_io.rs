//! File boundary: choosing, reading and saving files.

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MIME_JSON: &str = "application/json";
pub const MIME_HTML: &str = "text/html";

/// Errors raised at the file boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileError {
    #[error("could not read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("{path} is not valid UTF-8 text")]
    NotText { path: String },

    #[error("could not write {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("could not list {path}: {reason}")]
    List { path: String, reason: String },
}

/// Comma separated list of accepted suffixes, e.g. `.json` or `.json,.txt`.
/// `*` accepts everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptPattern {
    suffixes: Vec<String>,
}

impl Default for AcceptPattern {
    fn default() -> Self {
        Self::new(".json")
    }
}

impl AcceptPattern {
    pub fn new(pattern: &str) -> Self {
        let suffixes = pattern
            .split(',')
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { suffixes }
    }

    pub fn matches(&self, path: &Path) -> bool {
        if self.suffixes.is_empty() || self.suffixes.iter().any(|s| s == "*") {
            return true;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }
}

/// A file the user picked for import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub path: PathBuf,
}

impl PickedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Files in `dir` the user may pick: directories first, then accepted files,
/// each group sorted by name. Hidden entries are skipped.
pub fn list_candidates(dir: &Path, accept: &AcceptPattern) -> Result<Vec<PathBuf>, FileError> {
    let entries = fs::read_dir(dir).map_err(|e| FileError::List {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if hidden {
            continue;
        }
        if path.is_dir() {
            dirs.push(path);
        } else if accept.matches(&path) {
            files.push(path);
        }
    }
    dirs.sort();
    files.sort();
    dirs.extend(files);
    Ok(dirs)
}

/// Reads picked files and saves exports.
#[async_trait]
pub trait FileAdapter: Send + Sync + std::fmt::Debug {
    /// Read the whole file as UTF-8 text.
    async fn read_as_text(&self, file: &PickedFile) -> Result<String, FileError>;

    /// Save `content` under `filename`. Returns where it was written. Must not
    /// leave a partial file behind on failure.
    fn save_as(&self, content: &str, filename: &str, mime: &str) -> Result<PathBuf, FileError>;
}

/// Local filesystem adapter writing exports into a fixed directory.
#[derive(Debug, Clone)]
pub struct FsFileAdapter {
    export_dir: PathBuf,
}

impl FsFileAdapter {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}

#[async_trait]
impl FileAdapter for FsFileAdapter {
    async fn read_as_text(&self, file: &PickedFile) -> Result<String, FileError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| FileError::Read {
                path: file.path.display().to_string(),
                reason: e.to_string(),
            })?;
        String::from_utf8(bytes).map_err(|_| FileError::NotText {
            path: file.path.display().to_string(),
        })
    }

    fn save_as(&self, content: &str, filename: &str, mime: &str) -> Result<PathBuf, FileError> {
        let target = self.export_dir.join(filename);
        let write_error = |e: std::io::Error| FileError::Write {
            path: target.display().to_string(),
            reason: e.to_string(),
        };

        fs::create_dir_all(&self.export_dir).map_err(write_error)?;

        // Write next to the target and rename so readers never see a partial file
        let partial = self.export_dir.join(format!(".{filename}.partial"));
        if let Err(e) = fs::write(&partial, content).and_then(|_| fs::rename(&partial, &target)) {
            let _ = fs::remove_file(&partial);
            return Err(write_error(e));
        }

        log::info!("Saved {} ({}) to {:?}", filename, mime, target);
        Ok(target)
    }
}
