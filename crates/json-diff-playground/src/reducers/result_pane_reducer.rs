//! Result Pane Reducer
//!
//! Moves the cursor over the rendered diff lines.

use crate::actions::ResultPaneAction;
use crate::state::ResultPaneState;

/// `line_count` is the number of rendered lines currently on display.
pub fn reduce_result_pane(
    mut state: ResultPaneState,
    action: &ResultPaneAction,
    line_count: usize,
) -> ResultPaneState {
    let last = line_count.saturating_sub(1);
    match action {
        ResultPaneAction::NavigateNext => {
            state.cursor = (state.cursor + 1).min(last);
        }
        ResultPaneAction::NavigatePrevious => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        ResultPaneAction::NavigateToTop => {
            state.cursor = 0;
        }
        ResultPaneAction::NavigateToBottom => {
            state.cursor = last;
        }
        // Folding happens in the workspace middleware
        ResultPaneAction::ToggleNode => {}
    }
    state
}
