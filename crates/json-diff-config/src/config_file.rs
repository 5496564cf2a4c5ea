use std::{env, path::PathBuf};

use crate::paths;

const CONFIG_FILE: &str = ".json-diff-playground.toml";

/// Load config file content, first match wins:
///
/// 1. `.json-diff-playground.toml` in the current working directory
/// 2. `~/.json-diff-playground.toml`
/// 3. `config.toml` in the application config directory
pub fn load_config_file() -> Option<String> {
    candidates().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidates() -> Vec<PathBuf> {
    let mut found = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = env::var_os("HOME") {
        found.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    if let Ok(path) = paths::app_config_path() {
        found.push(path);
    }
    found
}
