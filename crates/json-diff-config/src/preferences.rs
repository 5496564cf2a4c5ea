//! Editor preference persistence
//!
//! Preferences live in a small key-value blob file (string keys, string
//! values) under [`STORAGE_KEY`]. Reading never fails: an absent or corrupt
//! entry yields [`EditorPreferences::default`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Storage key the editor preferences are filed under
pub const STORAGE_KEY: &str = "json-diff-editor-preferences";

pub const MIN_FONT_SIZE: u8 = 10;
pub const MAX_FONT_SIZE: u8 = 24;
const DEFAULT_FONT_SIZE: u8 = 14;

/// Editor colour theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorTheme {
    #[default]
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "vs-dark", alias = "dark")]
    Dark,
}

impl EditorTheme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// Persisted editor preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorPreferences {
    pub theme: EditorTheme,
    pub font_size: u8,
    pub minimap: bool,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            theme: EditorTheme::Light,
            font_size: DEFAULT_FONT_SIZE,
            minimap: true,
        }
    }
}

impl EditorPreferences {
    /// Copy with the font size moved by `delta`, kept within bounds
    pub fn with_font_size_step(mut self, delta: i8) -> Self {
        self.font_size = clamp_font_size(self.font_size as i16 + delta as i16);
        self
    }

    fn normalized(mut self) -> Self {
        self.font_size = clamp_font_size(self.font_size as i16);
        self
    }
}

fn clamp_font_size(size: i16) -> u8 {
    size.clamp(MIN_FONT_SIZE as i16, MAX_FONT_SIZE as i16) as u8
}

/// Key-value blob file holding the preferences entry
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store backed by the file in the application config directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::at(paths::preferences_path()?))
    }

    /// Store backed by a specific file
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, silently falling back to defaults
    pub fn load(&self) -> EditorPreferences {
        match self.read_entry() {
            Ok(Some(raw)) => match serde_json::from_str::<EditorPreferences>(&raw) {
                Ok(prefs) => {
                    log::info!("Loaded editor preferences from {:?}", self.path);
                    prefs.normalized()
                }
                Err(e) => {
                    log::debug!("Ignoring corrupt editor preferences: {}", e);
                    EditorPreferences::default()
                }
            },
            Ok(None) => {
                log::debug!("No editor preferences stored, using defaults");
                EditorPreferences::default()
            }
            Err(e) => {
                log::debug!("Ignoring unreadable preference store: {:#}", e);
                EditorPreferences::default()
            }
        }
    }

    /// Save preferences, keeping any other entries in the blob
    pub fn save(&self, prefs: &EditorPreferences) -> Result<()> {
        let mut entries = self.read_blob().unwrap_or_default();
        let raw = serde_json::to_string(prefs).context("Failed to serialize preferences")?;
        entries.insert(STORAGE_KEY.to_string(), raw);

        let content =
            serde_json::to_string_pretty(&entries).context("Failed to serialize preference store")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preference store: {:?}", self.path))?;

        log::info!("Saved editor preferences to {:?}", self.path);
        Ok(())
    }

    fn read_entry(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(self.read_blob()?.remove(STORAGE_KEY))
    }

    fn read_blob(&self) -> Result<BTreeMap<String, String>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preference store: {:?}", self.path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse preference store: {:?}", self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> PreferenceStore {
        PreferenceStore::at(dir.path().join("preferences.json"))
    }

    #[test]
    fn test_absent_store_uses_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            store(&dir).load(),
            EditorPreferences {
                theme: EditorTheme::Light,
                font_size: 14,
                minimap: true
            }
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let prefs = EditorPreferences {
            theme: EditorTheme::Dark,
            font_size: 18,
            minimap: false,
        };
        store.save(&prefs).unwrap();
        assert_eq!(store.load(), prefs);

        let blob: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(
            blob[STORAGE_KEY],
            r#"{"theme":"vs-dark","fontSize":18,"minimap":false}"#
        );
    }

    #[test]
    fn test_corrupt_entry_falls_back_silently() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let blob = BTreeMap::from([(STORAGE_KEY.to_string(), "{not json".to_string())]);
        fs::write(store.path(), serde_json::to_string(&blob).unwrap()).unwrap();
        assert_eq!(store.load(), EditorPreferences::default());

        fs::write(store.path(), "garbage").unwrap();
        assert_eq!(store.load(), EditorPreferences::default());
    }

    #[test]
    fn test_save_keeps_other_entries() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let blob = BTreeMap::from([("other".to_string(), "kept".to_string())]);
        fs::write(store.path(), serde_json::to_string(&blob).unwrap()).unwrap();

        store.save(&EditorPreferences::default()).unwrap();

        let blob: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(blob["other"], "kept");
        assert!(blob.contains_key(STORAGE_KEY));
    }

    #[test]
    fn test_dark_alias_and_font_clamp() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let blob = BTreeMap::from([(
            STORAGE_KEY.to_string(),
            r#"{"theme":"dark","fontSize":40,"minimap":true}"#.to_string(),
        )]);
        fs::write(store.path(), serde_json::to_string(&blob).unwrap()).unwrap();

        let prefs = store.load();
        assert_eq!(prefs.theme, EditorTheme::Dark);
        assert_eq!(prefs.font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn test_font_size_step() {
        let prefs = EditorPreferences::default();
        assert_eq!(prefs.with_font_size_step(2).font_size, 16);
        assert_eq!(prefs.with_font_size_step(-10).font_size, MIN_FONT_SIZE);
        assert_eq!(prefs.with_font_size_step(20).font_size, MAX_FONT_SIZE);
    }
}
