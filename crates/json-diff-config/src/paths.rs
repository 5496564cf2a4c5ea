//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/json-diff-playground/`, `~/.cache/json-diff-playground/`
//! - macOS: `~/Library/Application Support/json-diff-playground/`, `~/Library/Caches/json-diff-playground/`
//! - Windows: `%APPDATA%\json-diff-playground\`, `%LOCALAPPDATA%\json-diff-playground\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_NAME: &str = "json-diff-playground";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory: {:?}", dir))?;
    Ok(dir)
}

/// Get path to the preference store file
pub fn preferences_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("preferences.json"))
}

/// Get path to app config file in the config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_path_layout() {
        if let Ok(path) = preferences_path() {
            assert!(path.ends_with("preferences.json"));
            assert!(path.parent().unwrap().ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_app_config_path_layout() {
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("config.toml"));
        }
    }
}
