//! Editor settings actions

use json_diff_config::EditorPreferences;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    NavigateNext,
    NavigatePrevious,
    /// Raise the highlighted setting (font size up, or flip a toggle)
    Increase,
    /// Lower the highlighted setting
    Decrease,
    /// Flip the highlighted toggle
    Toggle,
    /// Preferences were loaded or changed
    Applied(EditorPreferences),
}
