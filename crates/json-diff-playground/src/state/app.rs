//! Application State

use crate::keymap::{default_keymap, Keymap};
use crate::views::{View, WorkspaceView};
use json_diff_config::{AppConfig, EditorPreferences};
use json_diff_workspace::Side;

use super::{
    EditorCarets, ExamplePickerState, FilePromptState, KeyBindingsPanelState, ResultPaneState,
    SettingsState, StatusBarState, WorkspaceFrame,
};

/// Pane of the workspace screen that receives keyboard input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Original,
    New,
    Result,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Self::Original => Self::New,
            Self::New => Self::Result,
            Self::Result => Self::Original,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Original => Self::Result,
            Self::New => Self::Original,
            Self::Result => Self::New,
        }
    }

    /// Editor behind this pane, if it is one
    pub fn side(self) -> Option<Side> {
        match self {
            Self::Original => Some(Side::Left),
            Self::New => Some(Side::Right),
            Self::Result => None,
        }
    }

    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self::Original,
            Side::Right => Self::New,
        }
    }
}

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    pub view_stack: Vec<Box<dyn View>>,
    pub focus: Pane,
    /// Latest copy of the workspace published by the workspace middleware
    pub workspace: WorkspaceFrame,
    pub result_pane: ResultPaneState,
    pub example_picker: ExamplePickerState,
    pub file_prompt: FilePromptState,
    pub settings: SettingsState,
    pub key_bindings_panel: KeyBindingsPanelState,
    pub status_bar: StatusBarState,
    pub preferences: EditorPreferences,
    pub theme: json_diff_theme::Theme,
    pub keymap: Keymap,
    pub app_config: AppConfig,
}

impl AppState {
    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }

    pub fn carets(&self) -> EditorCarets {
        self.workspace.carets
    }

    /// Editor that keyboard input and imports go to
    pub fn target_side(&self) -> Side {
        self.focus.side().unwrap_or(Side::Left)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("focus", &self.focus)
            .field("workspace", &self.workspace)
            .field("result_pane", &self.result_pane)
            .field("example_picker", &self.example_picker)
            .field("file_prompt", &self.file_prompt)
            .field("settings", &self.settings)
            .field("status_bar", &self.status_bar)
            .field("preferences", &self.preferences)
            .field("theme", &"<theme>")
            .field("app_config", &self.app_config)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            focus: self.focus,
            workspace: self.workspace.clone(),
            result_pane: self.result_pane.clone(),
            example_picker: self.example_picker.clone(),
            file_prompt: self.file_prompt.clone(),
            settings: self.settings.clone(),
            key_bindings_panel: self.key_bindings_panel.clone(),
            status_bar: self.status_bar.clone(),
            preferences: self.preferences,
            theme: self.theme.clone(),
            keymap: self.keymap.clone(),
            app_config: self.app_config.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(WorkspaceView::new())],
            focus: Pane::default(),
            workspace: WorkspaceFrame::default(),
            result_pane: ResultPaneState::default(),
            example_picker: ExamplePickerState::default(),
            file_prompt: FilePromptState::default(),
            settings: SettingsState::default(),
            key_bindings_panel: KeyBindingsPanelState::default(),
            status_bar: StatusBarState::default(),
            preferences: EditorPreferences::default(),
            theme: json_diff_theme::Theme::default(),
            keymap: default_keymap(),
            app_config: AppConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_cycle_visits_every_pane() {
        let mut pane = Pane::Original;
        let mut visited = vec![pane];
        for _ in 0..3 {
            pane = pane.next();
            visited.push(pane);
        }
        assert_eq!(
            visited,
            vec![Pane::Original, Pane::New, Pane::Result, Pane::Original]
        );
        assert_eq!(Pane::Original.previous(), Pane::Result);
    }

    #[test]
    fn test_imports_target_left_editor_from_result_pane() {
        let state = AppState {
            focus: Pane::Result,
            ..Default::default()
        };
        assert_eq!(state.target_side(), Side::Left);

        let state = AppState {
            focus: Pane::New,
            ..Default::default()
        };
        assert_eq!(state.target_side(), Side::Right);
    }
}
