//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod editor;
mod example_picker;
mod file_prompt;
mod key_bindings;
mod result_pane;
mod settings;
mod status_bar;

pub use app::{AppState, Pane};
pub use editor::{EditorCarets, WorkspaceFrame};
pub use example_picker::ExamplePickerState;
pub use file_prompt::{FileListing, FilePromptState, PromptEntry};
pub use key_bindings::KeyBindingsPanelState;
pub use result_pane::ResultPaneState;
pub use settings::{SettingsField, SettingsState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
