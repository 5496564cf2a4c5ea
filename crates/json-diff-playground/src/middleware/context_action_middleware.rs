//! Context Action Translation Middleware
//!
//! Translates semantic actions (Confirm, ToggleSelect) into view-specific
//! actions using the active view's `translate_context_action`.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct ContextActionMiddleware;

impl ContextActionMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for ContextActionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::ViewContext(context) = action else {
            return true;
        };
        match state
            .active_view()
            .and_then(|view| view.translate_context_action(*context, state))
        {
            Some(translated) => {
                log::debug!("ContextActionMiddleware: {:?} -> {:?}", context, translated);
                dispatcher.dispatch(translated);
            }
            None => log::debug!("Context action not handled by active view: {:?}", context),
        }
        false
    }
}
