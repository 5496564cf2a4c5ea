pub mod editor_pane_view_model;
pub mod key_bindings_view_model;
pub mod status_bar;
pub mod toolbar_view_model;

pub use editor_pane_view_model::{EditorPaneViewModel, SyntaxBadge};
pub use key_bindings_view_model::KeyBindingsViewModel;
pub use status_bar::StatusBarViewModel;
pub use toolbar_view_model::{ToolbarEntry, ToolbarViewModel};
