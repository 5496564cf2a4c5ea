//! Background worker thread that processes actions through middleware
//!
//! - The main thread renders, reads terminal input and runs the reducers
//! - The background thread runs the middleware chain (diffing, file I/O,
//!   preference persistence)
//! - Both talk through channels
//!
//! Actions dispatched by middleware via [`Dispatcher`] re-enter the chain.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: actions from the main thread and from the dispatcher
/// - `action_tx`: feeds `action_rx`; handed to middleware as a [`Dispatcher`]
/// - `result_tx`: actions no middleware consumed, for the reducers
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware + Send>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware + Send>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    loop {
        let action = match action_rx.recv() {
            Ok(action) => action,
            Err(RecvError) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        };

        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::error!("Failed to send quit action to main thread");
            }
            break;
        }

        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        let forward = process(&mut middleware, &action, &current_state, &dispatcher);

        // Events are for middleware only
        if forward && !matches!(action, Action::Event(_)) && result_tx.send(action).is_err() {
            log::error!("Result channel disconnected, shutting down");
            break;
        }
    }

    log::info!("Background worker stopped");
}

/// Run one action through the chain; `true` if no middleware consumed it.
pub fn process(
    middleware: &mut [Box<dyn Middleware + Send>],
    action: &Action,
    state: &AppState,
    dispatcher: &Dispatcher,
) -> bool {
    middleware
        .iter_mut()
        .all(|mw| mw.handle(action, state, dispatcher))
}
