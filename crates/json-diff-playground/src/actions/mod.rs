//! Actions module
//!
//! All actions in the application, tagged by domain:
//! - Generic actions (Navigation, TextInput, ViewContext) that the active view
//!   translates into screen-specific actions
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted

pub mod bootstrap;
pub mod context_action;
pub mod editor;
pub mod event;
pub mod example_picker;
pub mod file_prompt;
pub mod focus;
pub mod global;
pub mod key_bindings;
pub mod navigation;
pub mod result_pane;
pub mod settings;
pub mod status_bar;
pub mod text_input;

pub use bootstrap::BootstrapAction;
pub use context_action::ContextAction;
pub use editor::EditorAction;
pub use event::Event;
pub use example_picker::ExamplePickerAction;
pub use file_prompt::FilePromptAction;
pub use focus::FocusAction;
pub use global::GlobalAction;
pub use key_bindings::KeyBindingsAction;
pub use navigation::NavigationAction;
pub use result_pane::ResultPaneAction;
pub use settings::SettingsAction;
pub use status_bar::StatusBarAction;
pub use text_input::{CaretMove, TextInputAction};

use crate::state::WorkspaceFrame;
use json_diff_workspace::WorkspaceAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Facts that re-enter the middleware chain; never reduced
    Event(Event),

    /// Generic navigation action - translated by the active view
    Navigate(NavigationAction),
    /// Generic text input action - translated by the active view
    TextInput(TextInputAction),
    /// Context-sensitive action - translated by the active view
    ViewContext(ContextAction),

    /// Global application actions
    Global(GlobalAction),
    /// Bootstrap/initialization actions
    Bootstrap(BootstrapAction),

    /// Focus movement between workspace panes
    Focus(FocusAction),
    /// Text editing in the focused editor
    Editor(EditorAction),
    /// Commands for the workspace controller (consumed by middleware)
    Workspace(WorkspaceAction),
    /// Fresh copy of the workspace after the controller changed it
    WorkspaceSynced(Box<WorkspaceFrame>),
    /// Result pane actions
    ResultPane(ResultPaneAction),
    /// Example picker actions
    ExamplePicker(ExamplePickerAction),
    /// Import file prompt actions
    FilePrompt(FilePromptAction),
    /// Editor settings actions
    Settings(SettingsAction),
    /// Key bindings help panel actions
    KeyBindings(KeyBindingsAction),
    /// Status bar actions
    StatusBar(StatusBarAction),
}

impl Action {
    /// Factory method for creating events.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
