//! Command identifiers
//!
//! Every command a key can trigger. Keybindings reference commands by ID, and
//! the help panel lists them by category.

use strum::EnumIter;

/// Unique identifier for each command in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CommandId {
    // === Workspace ===
    WorkspaceCompare,
    WorkspaceImport,
    WorkspaceExportData,
    WorkspaceExportDocument,
    WorkspaceFormat,
    ExamplesOpen,

    // === Focus ===
    FocusNext,
    FocusPrevious,

    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateLeft,
    NavigateRight,
    NavigateToTop,
    NavigateToBottom,

    // === Context ===
    Confirm,
    ToggleSelect,

    // === Panels ===
    SettingsOpen,
    KeyBindingsOpen,

    // === General ===
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> crate::actions::Action {
        use crate::actions::{
            Action, ContextAction, EditorAction, FilePromptAction, FocusAction, GlobalAction,
            NavigationAction,
        };
        use crate::views::{ExamplePickerView, KeyBindingsView, SettingsView};
        use json_diff_workspace::WorkspaceAction;

        match self {
            Self::WorkspaceCompare => Action::Workspace(WorkspaceAction::Compare),
            Self::WorkspaceImport => Action::FilePrompt(FilePromptAction::Open),
            Self::WorkspaceExportData => Action::Workspace(WorkspaceAction::ExportData),
            Self::WorkspaceExportDocument => Action::Workspace(WorkspaceAction::ExportDocument),
            Self::WorkspaceFormat => Action::Editor(EditorAction::Format),
            Self::ExamplesOpen => {
                Action::Global(GlobalAction::PushView(Box::new(ExamplePickerView::new())))
            }

            Self::FocusNext => Action::Focus(FocusAction::Next),
            Self::FocusPrevious => Action::Focus(FocusAction::Previous),

            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateLeft => Action::Navigate(NavigationAction::Left),
            Self::NavigateRight => Action::Navigate(NavigationAction::Right),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::Confirm => Action::ViewContext(ContextAction::Confirm),
            Self::ToggleSelect => Action::ViewContext(ContextAction::ToggleSelect),

            Self::SettingsOpen => {
                Action::Global(GlobalAction::PushView(Box::new(SettingsView::new())))
            }
            Self::KeyBindingsOpen => {
                Action::Global(GlobalAction::PushView(Box::new(KeyBindingsView::new())))
            }

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Short title shown in the help panel and toolbar
    pub fn title(&self) -> &'static str {
        match self {
            Self::WorkspaceCompare => "Compare",
            Self::WorkspaceImport => "Import file",
            Self::WorkspaceExportData => "Export JSON",
            Self::WorkspaceExportDocument => "Export HTML",
            Self::WorkspaceFormat => "Format",
            Self::ExamplesOpen => "Examples",

            Self::FocusNext => "Next pane",
            Self::FocusPrevious => "Previous pane",

            Self::NavigateNext => "Navigate down",
            Self::NavigatePrevious => "Navigate up",
            Self::NavigateLeft => "Navigate left",
            Self::NavigateRight => "Navigate right",
            Self::NavigateToTop => "Go to top",
            Self::NavigateToBottom => "Go to bottom",

            Self::Confirm => "Confirm",
            Self::ToggleSelect => "Toggle",

            Self::SettingsOpen => "Settings",
            Self::KeyBindingsOpen => "Key bindings",

            Self::GlobalClose => "Close",
            Self::GlobalQuit => "Quit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::WorkspaceCompare => "Validate both editors and compute the diff",
            Self::WorkspaceImport => "Load a file into the focused editor",
            Self::WorkspaceExportData => "Save the diff result as JSON",
            Self::WorkspaceExportDocument => "Save the rendered diff as an HTML page",
            Self::WorkspaceFormat => "Pretty-print the focused editor",
            Self::ExamplesOpen => "Load a built-in example pair",

            Self::FocusNext => "Move focus: Original, New, Result",
            Self::FocusPrevious => "Move focus backwards",

            Self::NavigateNext => "Move selection down",
            Self::NavigatePrevious => "Move selection up",
            Self::NavigateLeft => "Move selection left or decrease a setting",
            Self::NavigateRight => "Move selection right or increase a setting",
            Self::NavigateToTop => "Jump to the first line",
            Self::NavigateToBottom => "Jump to the last line",

            Self::Confirm => "Expand/collapse a node, or pick the highlighted entry",
            Self::ToggleSelect => "Expand/collapse a node, or flip a setting",

            Self::SettingsOpen => "Editor theme, font size and minimap",
            Self::KeyBindingsOpen => "Show this help",

            Self::GlobalClose => "Close the current panel",
            Self::GlobalQuit => "Quit the application",
        }
    }

    /// Category heading in the help panel
    pub fn category(&self) -> &'static str {
        match self {
            Self::WorkspaceCompare
            | Self::WorkspaceImport
            | Self::WorkspaceExportData
            | Self::WorkspaceExportDocument
            | Self::WorkspaceFormat
            | Self::ExamplesOpen => "Workspace",

            Self::FocusNext | Self::FocusPrevious => "Focus",

            Self::NavigateNext
            | Self::NavigatePrevious
            | Self::NavigateLeft
            | Self::NavigateRight
            | Self::NavigateToTop
            | Self::NavigateToBottom
            | Self::Confirm
            | Self::ToggleSelect => "Navigation",

            Self::SettingsOpen | Self::KeyBindingsOpen | Self::GlobalClose | Self::GlobalQuit => {
                "General"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, GlobalAction};
    use json_diff_workspace::WorkspaceAction;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_command_has_title_and_category() {
        for id in CommandId::iter() {
            assert!(!id.title().is_empty(), "{id:?} has no title");
            assert!(!id.description().is_empty(), "{id:?} has no description");
            assert!(!id.category().is_empty(), "{id:?} has no category");
        }
    }

    #[test]
    fn test_compare_maps_to_workspace_action() {
        assert!(matches!(
            CommandId::WorkspaceCompare.to_action(),
            Action::Workspace(WorkspaceAction::Compare)
        ));
        assert!(matches!(
            CommandId::GlobalQuit.to_action(),
            Action::Global(GlobalAction::Quit)
        ));
    }
}
