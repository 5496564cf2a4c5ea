//! Bootstrap actions

use json_diff_config::AppConfig;

/// Actions for application bootstrap/initialization
#[derive(Debug, Clone)]
pub enum BootstrapAction {
    /// Bootstrap process started
    Start,
    /// Application configuration loaded
    ConfigLoaded(AppConfig),
}
