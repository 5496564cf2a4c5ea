//! Key Bindings Panel Reducer

use crate::actions::KeyBindingsAction;
use crate::state::KeyBindingsPanelState;

/// `max_scroll` comes from the key bindings view model.
pub fn reduce_key_bindings(
    mut state: KeyBindingsPanelState,
    action: &KeyBindingsAction,
    max_scroll: usize,
) -> KeyBindingsPanelState {
    match action {
        KeyBindingsAction::NavigateNext => {
            state.scroll_offset = (state.scroll_offset + 1).min(max_scroll);
        }
        KeyBindingsAction::NavigatePrevious => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }
        KeyBindingsAction::NavigateToTop => {
            state.scroll_offset = 0;
        }
        KeyBindingsAction::NavigateToBottom => {
            state.scroll_offset = max_scroll;
        }
    }
    state
}
