//! Import file prompt state

use json_diff_workspace::Side;
use std::path::{Path, PathBuf};

/// One row of the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEntry {
    pub path: PathBuf,
    pub label: String,
    pub is_dir: bool,
}

impl PromptEntry {
    pub fn parent(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            label: "../".to_string(),
            is_dir: true,
        }
    }

    pub fn from_path(path: PathBuf) -> Self {
        let is_dir = path.is_dir();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let label = if is_dir { format!("{name}/") } else { name };
        Self {
            path,
            label,
            is_dir,
        }
    }
}

/// Contents of one directory, as offered by the prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListing {
    pub dir: PathBuf,
    pub entries: Vec<PromptEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePromptState {
    /// Editor the picked file goes into
    pub side: Side,
    pub listing: FileListing,
    /// Case-insensitive substring filter typed by the user
    pub filter: String,
    /// Index into the filtered entries
    pub selected: usize,
}

impl Default for FilePromptState {
    fn default() -> Self {
        Self {
            side: Side::Left,
            listing: FileListing::default(),
            filter: String::new(),
            selected: 0,
        }
    }
}

impl FilePromptState {
    /// Entries matching the filter; the parent entry always stays visible
    pub fn visible(&self) -> Vec<&PromptEntry> {
        let needle = self.filter.to_lowercase();
        self.listing
            .entries
            .iter()
            .filter(|e| e.label == "../" || e.label.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected_entry(&self) -> Option<&PromptEntry> {
        self.visible().get(self.selected).copied()
    }
}
