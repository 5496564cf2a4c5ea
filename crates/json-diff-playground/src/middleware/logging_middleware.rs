use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Logs every action passing through the chain
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Carries both documents and the rendered tree
            Action::WorkspaceSynced(frame) => log::trace!(
                "Action: WorkspaceSynced ({} rendered lines)",
                frame.snapshot.lines.len()
            ),
            Action::Global(GlobalAction::KeyPressed(_)) => log::trace!("Action: {:?}", action),
            _ => log::debug!("Action: {:?}", action),
        }
        true
    }
}
