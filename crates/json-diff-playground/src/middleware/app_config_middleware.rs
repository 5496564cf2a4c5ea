//! App Config Middleware
//!
//! Loads the application configuration on bootstrap.

use crate::actions::{Action, BootstrapAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use json_diff_config::AppConfig;

pub struct AppConfigMiddleware {
    loader: Box<dyn Fn() -> AppConfig + Send>,
    config_loaded: bool,
}

impl AppConfigMiddleware {
    pub fn new() -> Self {
        Self::with_loader(AppConfig::load)
    }

    pub fn with_loader(loader: impl Fn() -> AppConfig + Send + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            config_loaded: false,
        }
    }
}

impl Default for AppConfigMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for AppConfigMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if matches!(action, Action::Bootstrap(BootstrapAction::Start)) && !self.config_loaded {
            let config = (self.loader)();
            log::info!(
                "AppConfigMiddleware: loaded config (expand_depth: {}, export_dir: {})",
                config.expand_depth,
                config.export_dir
            );
            dispatcher.dispatch(Action::Bootstrap(BootstrapAction::ConfigLoaded(config)));
            self.config_loaded = true;
        }
        true
    }
}
