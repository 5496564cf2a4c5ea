//! Configuration and preference persistence for json-diff-playground
//!
//! This crate provides:
//! - File path utilities for config and cache directories
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Editor preferences persisted under a fixed storage key

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod preferences;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir, preferences_path};
pub use preferences::{
    EditorPreferences, EditorTheme, PreferenceStore, MAX_FONT_SIZE, MIN_FONT_SIZE, STORAGE_KEY,
};
