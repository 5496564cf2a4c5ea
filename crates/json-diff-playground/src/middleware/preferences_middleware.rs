//! Preferences Middleware
//!
//! Owns the editor preferences: loads them on bootstrap, applies changes
//! requested from the settings panel and persists every change.

use crate::actions::{Action, BootstrapAction, SettingsAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, SettingsField};
use json_diff_config::{EditorPreferences, PreferenceStore};

pub struct PreferencesMiddleware {
    store: Option<PreferenceStore>,
    current: EditorPreferences,
}

impl PreferencesMiddleware {
    /// Use the default preference file; without one, changes only live in memory
    pub fn new() -> Self {
        let store = match PreferenceStore::open_default() {
            Ok(store) => Some(store),
            Err(e) => {
                log::warn!("Editor preferences will not be saved: {:#}", e);
                None
            }
        };
        Self::with_store(store)
    }

    pub fn with_store(store: Option<PreferenceStore>) -> Self {
        Self {
            store,
            current: EditorPreferences::default(),
        }
    }

    fn changed(&self, field: SettingsField, action: SettingsAction) -> Option<EditorPreferences> {
        let mut prefs = self.current;
        match (field, action) {
            (SettingsField::Theme, SettingsAction::Increase)
            | (SettingsField::Theme, SettingsAction::Decrease)
            | (SettingsField::Theme, SettingsAction::Toggle) => prefs.theme = prefs.theme.toggled(),
            (SettingsField::Minimap, SettingsAction::Increase)
            | (SettingsField::Minimap, SettingsAction::Decrease)
            | (SettingsField::Minimap, SettingsAction::Toggle) => prefs.minimap = !prefs.minimap,
            (SettingsField::FontSize, SettingsAction::Increase) => {
                prefs = prefs.with_font_size_step(1)
            }
            (SettingsField::FontSize, SettingsAction::Decrease) => {
                prefs = prefs.with_font_size_step(-1)
            }
            _ => return None,
        }
        (prefs != self.current).then_some(prefs)
    }

    fn persist(&self, dispatcher: &Dispatcher) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(&self.current) {
            log::error!("Failed to save editor preferences: {:#}", e);
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "Could not save editor settings",
                "Settings",
            )));
        }
    }
}

impl Default for PreferencesMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for PreferencesMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                if let Some(store) = &self.store {
                    self.current = store.load();
                }
                log::info!("PreferencesMiddleware: loaded {:?}", self.current);
                dispatcher.dispatch(Action::Settings(SettingsAction::Applied(self.current)));
                true
            }
            Action::Settings(
                change @ (SettingsAction::Increase
                | SettingsAction::Decrease
                | SettingsAction::Toggle),
            ) => {
                if let Some(prefs) = self.changed(state.settings.selected, *change) {
                    self.current = prefs;
                    self.persist(dispatcher);
                    dispatcher.dispatch(Action::Settings(SettingsAction::Applied(prefs)));
                }
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_diff_config::{EditorTheme, MAX_FONT_SIZE};
    use pretty_assertions::assert_eq;
    use std::sync::mpsc;

    fn applied(actions: &[Action]) -> Vec<EditorPreferences> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Settings(SettingsAction::Applied(p)) => Some(*p),
                _ => None,
            })
            .collect()
    }

    fn state_on(field: SettingsField) -> AppState {
        let mut state = AppState::default();
        state.settings.selected = field;
        state
    }

    #[test]
    fn test_bootstrap_loads_and_applies_saved_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::at(dir.path().join("preferences.json"));
        let saved = EditorPreferences {
            theme: EditorTheme::Dark,
            font_size: 18,
            minimap: false,
        };
        store.save(&saved).unwrap();

        let (tx, rx) = mpsc::channel();
        let mut middleware = PreferencesMiddleware::with_store(Some(store));
        middleware.handle(
            &Action::Bootstrap(BootstrapAction::Start),
            &AppState::default(),
            &Dispatcher::new(tx),
        );

        assert_eq!(applied(&rx.try_iter().collect::<Vec<_>>()), vec![saved]);
    }

    #[test]
    fn test_theme_toggle_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let (tx, rx) = mpsc::channel();
        let mut middleware = PreferencesMiddleware::with_store(Some(PreferenceStore::at(&path)));

        let consumed = !middleware.handle(
            &Action::Settings(SettingsAction::Toggle),
            &state_on(SettingsField::Theme),
            &Dispatcher::new(tx),
        );

        assert!(consumed);
        let prefs = applied(&rx.try_iter().collect::<Vec<_>>());
        assert_eq!(prefs.len(), 1);
        assert_eq!(prefs[0].theme, EditorTheme::Dark);
        assert_eq!(PreferenceStore::at(&path).load().theme, EditorTheme::Dark);
    }

    #[test]
    fn test_font_size_stops_at_bound() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = PreferencesMiddleware::with_store(None);
        let state = state_on(SettingsField::FontSize);

        for _ in 0..20 {
            middleware.handle(&Action::Settings(SettingsAction::Increase), &state, &dispatcher);
        }

        let prefs = applied(&rx.try_iter().collect::<Vec<_>>());
        assert_eq!(prefs.last().map(|p| p.font_size), Some(MAX_FONT_SIZE));
        // Only real changes are announced
        assert_eq!(prefs.len(), (MAX_FONT_SIZE - 14) as usize);
    }

    #[test]
    fn test_toggle_on_font_size_is_ignored() {
        let (tx, rx) = mpsc::channel();
        let mut middleware = PreferencesMiddleware::with_store(None);
        middleware.handle(
            &Action::Settings(SettingsAction::Toggle),
            &state_on(SettingsField::FontSize),
            &Dispatcher::new(tx),
        );
        assert!(rx.try_iter().next().is_none());
    }
}
