//! Dispatcher for middleware action dispatch
//!
//! Actions dispatched here go back to the background worker and re-enter the
//! middleware chain from the beginning, so one middleware can trigger another.

use crate::actions::Action;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// `action_tx` must feed the background worker.
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
