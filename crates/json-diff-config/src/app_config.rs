//! Application configuration
//!
//! Configuration loaded from `.json-diff-playground.toml`.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from `.json-diff-playground.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Containers nested this deep or deeper start collapsed in the result view
    #[serde(default = "default_expand_depth")]
    pub expand_depth: usize,

    /// Whether unchanged values are listed in the result view
    #[serde(default = "default_show_unchanged")]
    pub show_unchanged: bool,

    /// Directory exports are written to
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// File suffix offered by the import prompt
    #[serde(default = "default_accept")]
    pub accept: String,
}

fn default_expand_depth() -> usize {
    3
}

fn default_show_unchanged() -> bool {
    true
}

fn default_export_dir() -> String {
    ".".to_string()
}

fn default_accept() -> String {
    ".json".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            expand_depth: default_expand_depth(),
            show_unchanged: default_show_unchanged(),
            export_dir: default_export_dir(),
            accept: default_accept(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::parse(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse config content, falling back to defaults on error
    pub fn parse(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.expand_depth, 3);
        assert!(config.show_unchanged);
        assert_eq!(config.export_dir, ".");
        assert_eq!(config.accept, ".json");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = AppConfig::parse(
            r#"
            expand_depth = 1
            export_dir = "/tmp/exports"
        "#,
        );
        assert_eq!(config.expand_depth, 1);
        assert_eq!(config.export_dir, "/tmp/exports");
        // remaining fields use defaults
        assert!(config.show_unchanged);
        assert_eq!(config.accept, ".json");
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = AppConfig::parse("expand_depth = \"deep\"");
        assert_eq!(config, AppConfig::default());
    }
}
