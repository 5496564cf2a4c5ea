use crate::actions::{Action, ContextAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Clear},
    Frame,
};

pub mod example_picker_view;
pub mod file_prompt_view;
pub mod key_bindings_view;
pub mod settings_view;
pub mod status_bar;
pub mod workspace_view;

pub use example_picker_view::ExamplePickerView;
pub use file_prompt_view::FilePromptView;
pub use key_bindings_view::KeyBindingsView;
pub use settings_view::SettingsView;
pub use workspace_view::WorkspaceView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Workspace,
    ExamplePicker,
    FilePrompt,
    Settings,
    KeyBindings,
}

/// View trait - defines the interface that all views must implement
///
/// Views live on the view stack as trait objects, so the trait stays
/// object-safe, `Send` (views travel inside actions between threads) and
/// `Sync` (the background thread reads the shared state).
pub trait View: std::fmt::Debug + Send + Sync {
    fn view_id(&self) -> ViewId;

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action.
    fn translate_navigation(&self, _nav: NavigationAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action.
    fn translate_text_input(&self, _input: TextInputAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a context action (Enter, Space) to this view's specific action.
    fn translate_context_action(&self, _action: ContextAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Whether a keymap command may run while this view is on top.
    ///
    /// The keyboard middleware tries the next command bound to the same key
    /// when this returns `false`.
    fn accepts_action(&self, _action: &Action) -> bool {
        true
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render every view in the stack bottom-up, overlays last
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}

/// Dim the whole screen and clear a centered popup of the given size
fn popup_area(area: Rect, width: u16, height: u16, f: &mut Frame) -> Rect {
    let overlay = Block::default().style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(overlay, area);

    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(popup);

    f.render_widget(Clear, popup);
    popup
}
