//! Example Picker Middleware
//!
//! Turns a confirmed picker row into an example selection for the workspace.

use crate::actions::{Action, ExamplePickerAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use json_diff_workspace::{ExampleCatalog, WorkspaceAction};

#[derive(Debug, Default)]
pub struct ExamplePickerMiddleware {
    catalog: ExampleCatalog,
}

impl ExamplePickerMiddleware {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Middleware for ExamplePickerMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::ExamplePicker(ExamplePickerAction::Confirm) = action else {
            return true;
        };

        dispatcher.dispatch(Action::Global(GlobalAction::Close));
        match self.catalog.all().get(state.example_picker.selected) {
            Some(example) => {
                dispatcher.dispatch(Action::Workspace(WorkspaceAction::SelectExample(
                    example.id.to_string(),
                )));
            }
            None => log::warn!(
                "ExamplePickerMiddleware: no example at {}",
                state.example_picker.selected
            ),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ExamplePickerState;
    use std::sync::mpsc;

    #[test]
    fn test_confirm_selects_highlighted_example() {
        let mut middleware = ExamplePickerMiddleware::new();
        let (tx, rx) = mpsc::channel();
        let state = AppState {
            example_picker: ExamplePickerState { selected: 1 },
            ..Default::default()
        };

        let forward = middleware.handle(
            &Action::ExamplePicker(ExamplePickerAction::Confirm),
            &state,
            &Dispatcher::new(tx),
        );
        assert!(!forward);

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(actions[0], Action::Global(GlobalAction::Close)));
        assert!(matches!(
            &actions[1],
            Action::Workspace(WorkspaceAction::SelectExample(id)) if id == "nested"
        ));
    }

    #[test]
    fn test_navigation_passes_through() {
        let mut middleware = ExamplePickerMiddleware::new();
        let (tx, _rx) = mpsc::channel();
        assert!(middleware.handle(
            &Action::ExamplePicker(ExamplePickerAction::NavigateNext),
            &AppState::default(),
            &Dispatcher::new(tx),
        ));
    }
}
