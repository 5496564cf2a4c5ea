//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! ## Layer 1: Priority keys
//! Ctrl+C and Esc work regardless of context.
//!
//! ## Layer 2: Capabilities
//! Views with TEXT_INPUT receive character keys, editing keys and (for
//! multi-line fields) caret movement instead of keybindings.
//!
//! ## Layer 3: Keymap + gating
//! Look the key up in the keymap, then dispatch the first candidate command
//! the active view accepts.

use crate::actions::{Action, CaretMove, GlobalAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::dispatcher::Dispatcher;
use crate::keybindings::PendingKey;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Default)]
pub struct KeyboardMiddleware {
    /// First key of a two-key sequence
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // Layer 1
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if key.code == KeyCode::Esc {
            self.pending_key = None;
            if capabilities.accepts_text_input() {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // Layer 2
        if capabilities.accepts_text_input() {
            self.pending_key = None;
            if let Some(action) = text_input_for(key, capabilities) {
                log::trace!("Layer 2: TEXT_INPUT - {:?}", action);
                dispatcher.dispatch(action);
                return;
            }
        }

        // Layer 3
        let matched = state.keymap.match_key(&key, self.pending_key.as_ref());
        self.pending_key = None;
        if let Some(first) = matched.pending {
            log::debug!("Layer 3: waiting for second key of sequence (first: {})", first);
            self.pending_key = Some(PendingKey::new(first));
            return;
        }

        for command in matched.commands {
            let action = command.to_action();
            match view {
                Some(view) if !view.accepts_action(&action) => {
                    log::debug!(
                        "Layer 3: {:?} rejected by view {:?}, trying next",
                        command,
                        view.view_id()
                    );
                }
                _ => {
                    log::debug!("Layer 3: dispatching {:?}", command);
                    dispatcher.dispatch(action);
                    return;
                }
            }
        }
    }
}

/// Layer 2 routing for views that take text
fn text_input_for(key: KeyEvent, capabilities: PanelCapabilities) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let input = match key.code {
        KeyCode::Char('u') if ctrl => TextInputAction::ClearLine,
        KeyCode::Char(c) if !ctrl && !alt => TextInputAction::Char(c),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            TextInputAction::ClearLine
        }
        KeyCode::Backspace => TextInputAction::Backspace,
        KeyCode::Delete => TextInputAction::Delete,
        KeyCode::Enter => TextInputAction::Confirm,
        KeyCode::Down if capabilities.supports_item_navigation() => {
            return Some(Action::Navigate(NavigationAction::Next));
        }
        KeyCode::Up if capabilities.supports_item_navigation() => {
            return Some(Action::Navigate(NavigationAction::Previous));
        }
        code if capabilities.supports_caret_movement() => {
            let movement = match code {
                KeyCode::Left => CaretMove::Left,
                KeyCode::Right => CaretMove::Right,
                KeyCode::Up => CaretMove::Up,
                KeyCode::Down => CaretMove::Down,
                KeyCode::Home => CaretMove::LineStart,
                KeyCode::End => CaretMove::LineEnd,
                _ => return None,
            };
            TextInputAction::MoveCaret(movement)
        }
        _ => return None,
    };
    Some(Action::TextInput(input))
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{FocusAction, ResultPaneAction};
    use crate::state::Pane;
    use crate::views::ExamplePickerView;
    use json_diff_workspace::WorkspaceAction;
    use std::sync::mpsc;

    fn press(
        keyboard: &mut KeyboardMiddleware,
        state: &AppState,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let consumed = !keyboard.handle(
            &Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers))),
            state,
            &dispatcher,
        );
        assert!(consumed);
        rx.try_iter().collect()
    }

    fn focused(pane: Pane) -> AppState {
        AppState {
            focus: pane,
            ..Default::default()
        }
    }

    #[test]
    fn test_chars_are_typed_into_focused_editor() {
        let mut keyboard = KeyboardMiddleware::new();
        let actions = press(
            &mut keyboard,
            &focused(Pane::Original),
            KeyCode::Char('j'),
            KeyModifiers::NONE,
        );
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Char('j'))]
        ));
    }

    #[test]
    fn test_arrows_move_caret_in_editor() {
        let mut keyboard = KeyboardMiddleware::new();
        let actions = press(
            &mut keyboard,
            &focused(Pane::New),
            KeyCode::Up,
            KeyModifiers::NONE,
        );
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::MoveCaret(CaretMove::Up))]
        ));
    }

    #[test]
    fn test_ctrl_keys_reach_keymap_from_editor() {
        let mut keyboard = KeyboardMiddleware::new();
        let actions = press(
            &mut keyboard,
            &focused(Pane::Original),
            KeyCode::Char('r'),
            KeyModifiers::CONTROL,
        );
        assert!(matches!(
            actions.as_slice(),
            [Action::Workspace(WorkspaceAction::Compare)]
        ));
    }

    #[test]
    fn test_tab_moves_focus_from_editor() {
        let mut keyboard = KeyboardMiddleware::new();
        let actions = press(
            &mut keyboard,
            &focused(Pane::Original),
            KeyCode::Tab,
            KeyModifiers::NONE,
        );
        assert!(matches!(
            actions.as_slice(),
            [Action::Focus(FocusAction::Next)]
        ));
    }

    #[test]
    fn test_result_pane_uses_vim_navigation() {
        let mut keyboard = KeyboardMiddleware::new();
        let state = focused(Pane::Result);

        let actions = press(&mut keyboard, &state, KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Navigate(NavigationAction::Next)]
        ));

        let first = press(&mut keyboard, &state, KeyCode::Char('g'), KeyModifiers::NONE);
        assert!(first.is_empty());
        let second = press(&mut keyboard, &state, KeyCode::Char('g'), KeyModifiers::NONE);
        assert!(matches!(
            second.as_slice(),
            [Action::Navigate(NavigationAction::ToTop)]
        ));
    }

    #[test]
    fn test_enter_in_result_pane_is_a_context_action() {
        let mut keyboard = KeyboardMiddleware::new();
        let actions = press(
            &mut keyboard,
            &focused(Pane::Result),
            KeyCode::Enter,
            KeyModifiers::NONE,
        );
        assert!(matches!(
            actions.as_slice(),
            [Action::ViewContext(crate::actions::ContextAction::Confirm)]
        ));
        // The pane itself never sees raw keys
        assert!(!actions
            .iter()
            .any(|a| matches!(a, Action::ResultPane(ResultPaneAction::ToggleNode))));
    }

    #[test]
    fn test_esc_closes_overlay_without_text_input() {
        let mut keyboard = KeyboardMiddleware::new();
        let mut state = focused(Pane::Result);
        state.view_stack.push(Box::new(ExamplePickerView::new()));

        let actions = press(&mut keyboard, &state, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Close)]
        ));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut keyboard = KeyboardMiddleware::new();
        let actions = press(
            &mut keyboard,
            &focused(Pane::Original),
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        );
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Quit)]
        ));
    }
}
