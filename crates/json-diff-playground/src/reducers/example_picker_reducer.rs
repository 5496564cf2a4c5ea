//! Example Picker Reducer

use crate::actions::ExamplePickerAction;
use crate::state::ExamplePickerState;

/// `count` is the number of examples in the catalog.
pub fn reduce_example_picker(
    mut state: ExamplePickerState,
    action: &ExamplePickerAction,
    count: usize,
) -> ExamplePickerState {
    match action {
        ExamplePickerAction::NavigateNext => {
            if count > 0 {
                state.selected = (state.selected + 1) % count;
            }
        }
        ExamplePickerAction::NavigatePrevious => {
            if count > 0 {
                state.selected = (state.selected + count - 1) % count;
            }
        }
        ExamplePickerAction::NavigateToTop => {
            state.selected = 0;
        }
        ExamplePickerAction::NavigateToBottom => {
            state.selected = count.saturating_sub(1);
        }
        ExamplePickerAction::Confirm => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_selection_wraps() {
        let state = reduce_example_picker(
            ExamplePickerState::default(),
            &ExamplePickerAction::NavigatePrevious,
            4,
        );
        assert_eq!(state.selected, 3);

        let state = reduce_example_picker(state, &ExamplePickerAction::NavigateNext, 4);
        assert_eq!(state.selected, 0);
    }
}
