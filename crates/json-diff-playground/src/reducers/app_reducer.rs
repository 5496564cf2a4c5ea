use crate::actions::{Action, BootstrapAction, FocusAction, GlobalAction, SettingsAction};
use crate::reducers::{
    reduce_example_picker, reduce_file_prompt, reduce_key_bindings, reduce_result_pane,
    reduce_settings, reduce_status_bar,
};
use crate::state::AppState;
use crate::view_models::KeyBindingsViewModel;
use json_diff_config::EditorTheme;
use json_diff_theme::Theme;
use json_diff_workspace::ExampleCatalog;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::PushView(new_view)) => {
            // Pushing the view that is already on top toggles it off
            let is_duplicate = state
                .view_stack
                .last()
                .map(|top| top.view_id() == new_view.view_id())
                .unwrap_or(false);

            if is_duplicate {
                log::debug!("View already on top, closing: {:?}", new_view.view_id());
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        Action::Global(GlobalAction::Close) => {
            // The workspace stays; closing it is what Quit is for
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Cannot close the only view in the stack");
            }
        }
        Action::Bootstrap(BootstrapAction::ConfigLoaded(config)) => {
            state.app_config = config.clone();
        }
        Action::Focus(FocusAction::Next) => {
            state.focus = state.focus.next();
        }
        Action::Focus(FocusAction::Previous) => {
            state.focus = state.focus.previous();
        }
        Action::WorkspaceSynced(frame) => {
            state.workspace = (**frame).clone();
            let last = state.workspace.snapshot.lines.len().saturating_sub(1);
            state.result_pane.cursor = state.result_pane.cursor.min(last);
        }
        Action::ResultPane(pane_action) => {
            state.result_pane = reduce_result_pane(
                state.result_pane,
                pane_action,
                state.workspace.snapshot.lines.len(),
            );
        }
        Action::ExamplePicker(picker_action) => {
            state.example_picker = reduce_example_picker(
                state.example_picker,
                picker_action,
                ExampleCatalog::builtin().all().len(),
            );
        }
        Action::FilePrompt(prompt_action) => {
            state.file_prompt = reduce_file_prompt(state.file_prompt, prompt_action);
        }
        Action::Settings(SettingsAction::Applied(prefs)) => {
            state.preferences = *prefs;
            state.theme = Theme::for_mode(prefs.theme == EditorTheme::Dark);
        }
        Action::Settings(settings_action) => {
            state.settings = reduce_settings(state.settings, settings_action);
        }
        Action::KeyBindings(bindings_action) => {
            let max_scroll = KeyBindingsViewModel::max_scroll(&state.keymap);
            state.key_bindings_panel =
                reduce_key_bindings(state.key_bindings_panel, bindings_action, max_scroll);
        }
        Action::StatusBar(status_action) => {
            state.status_bar = reduce_status_bar(state.status_bar, status_action);
        }
        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ResultPaneAction;
    use crate::state::{Pane, WorkspaceFrame};
    use crate::views::{ExamplePickerView, ViewId};
    use json_diff_config::{AppConfig, EditorPreferences};
    use pretty_assertions::assert_eq;

    fn view_ids(state: &AppState) -> Vec<ViewId> {
        state.view_stack.iter().map(|v| v.view_id()).collect()
    }

    #[test]
    fn test_push_view_toggles_and_close_keeps_workspace() {
        let push = Action::Global(GlobalAction::PushView(Box::new(ExamplePickerView::new())));
        let state = reduce(AppState::default(), &push);
        assert_eq!(view_ids(&state), vec![ViewId::Workspace, ViewId::ExamplePicker]);
        let state = reduce(state, &push);
        assert_eq!(view_ids(&state), vec![ViewId::Workspace]);

        let state = reduce(state, &push);
        let state = reduce(state, &Action::Global(GlobalAction::Close));
        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert_eq!(view_ids(&state), vec![ViewId::Workspace]);
        assert!(state.running);
    }

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_focus_cycles_through_panes() {
        let mut state = AppState::default();
        state = reduce(state, &Action::Focus(FocusAction::Next));
        assert_eq!(state.focus, Pane::New);
        state = reduce(state, &Action::Focus(FocusAction::Next));
        assert_eq!(state.focus, Pane::Result);
        state = reduce(state, &Action::Focus(FocusAction::Previous));
        assert_eq!(state.focus, Pane::New);
    }

    #[test]
    fn test_synced_frame_clamps_result_cursor() {
        let mut state = AppState::default();
        state.result_pane.cursor = 7;
        let state = reduce(
            state,
            &Action::WorkspaceSynced(Box::new(WorkspaceFrame::default())),
        );
        assert_eq!(state.result_pane.cursor, 0);

        let state = reduce(state, &Action::ResultPane(ResultPaneAction::NavigateNext));
        assert_eq!(state.result_pane.cursor, 0);
    }

    #[test]
    fn test_applied_preferences_switch_theme() {
        let prefs = EditorPreferences {
            theme: EditorTheme::Dark,
            ..EditorPreferences::default()
        };
        let state = reduce(
            AppState::default(),
            &Action::Settings(SettingsAction::Applied(prefs)),
        );
        assert_eq!(state.preferences, prefs);
        assert_eq!(state.theme, Theme::dark());
    }

    #[test]
    fn test_config_loaded_is_stored() {
        let config = AppConfig {
            accept: ".json,.txt".to_string(),
            ..AppConfig::default()
        };
        let state = reduce(
            AppState::default(),
            &Action::Bootstrap(BootstrapAction::ConfigLoaded(config.clone())),
        );
        assert_eq!(state.app_config, config);
    }
}
