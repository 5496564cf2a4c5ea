use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod app_config_middleware;
pub mod context_action_middleware;
pub mod example_picker_middleware;
pub mod file_prompt_middleware;
pub mod import_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod navigation_middleware;
pub mod preferences_middleware;
pub mod text_input_middleware;
pub mod workspace_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread, so it may block on file I/O
/// without affecting the render loop.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Read-only snapshot of the application state
    /// - `dispatcher`: Dispatch actions that re-enter the middleware chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
