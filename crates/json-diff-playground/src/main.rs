use anyhow::{anyhow, Context};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction, TextInputAction};
use background::{spawn_background_worker, SharedState};
use middleware::{
    app_config_middleware::AppConfigMiddleware,
    context_action_middleware::ContextActionMiddleware,
    example_picker_middleware::ExamplePickerMiddleware,
    file_prompt_middleware::FilePromptMiddleware, import_middleware::ImportMiddleware,
    keyboard_middleware::KeyboardMiddleware, logging_middleware::LoggingMiddleware,
    navigation_middleware::NavigationMiddleware, preferences_middleware::PreferencesMiddleware,
    text_input_middleware::TextInputMiddleware, workspace_middleware::WorkspaceMiddleware,
    Middleware,
};
use state::AppState;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    match logger::init() {
        Ok(path) => log::info!("Starting json-diff-playground, logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    let middleware = build_middleware()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, middleware);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Exiting with error: {:#}", e);
    }
    log::info!("Exiting json-diff-playground");
    result
}

/// Middleware in execution order
fn build_middleware() -> anyhow::Result<Vec<Box<dyn Middleware + Send>>> {
    Ok(vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(NavigationMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(ContextActionMiddleware::new()),
        Box::new(AppConfigMiddleware::new()),
        Box::new(PreferencesMiddleware::new()),
        Box::new(FilePromptMiddleware::new()),
        Box::new(ExamplePickerMiddleware::new()),
        Box::new(WorkspaceMiddleware::new()),
        Box::new(ImportMiddleware::new()?),
    ])
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    middleware: Vec<Box<dyn Middleware + Send>>,
) -> anyhow::Result<()> {
    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();

    let mut state = AppState::default();
    let shared: SharedState = Arc::new(RwLock::new(state.clone()));
    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared),
        middleware,
    );

    send(&action_tx, Action::Bootstrap(BootstrapAction::Start))?;

    while state.running {
        terminal.draw(|frame| views::render(&state, frame.area(), frame))?;

        let mut changed = false;
        for action in result_rx.try_iter() {
            state = reducers::reduce(state, &action);
            changed = true;
        }
        if changed {
            *shared
                .write()
                .map_err(|e| anyhow!("Shared state poisoned: {}", e))? = state.clone();
        }
        if !state.running {
            break;
        }

        if event::poll(POLL_INTERVAL)? {
            let action = match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    Action::Global(GlobalAction::KeyPressed(key))
                }
                Event::Paste(text) => Action::TextInput(TextInputAction::Paste(text)),
                _ => continue,
            };
            // The worker stops on quit before the main loop has reduced it
            if action_tx.send(action).is_err() {
                log::debug!("Worker gone, leaving event loop");
                break;
            }
        }
    }

    drop(action_tx);
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }
    Ok(())
}

fn send(tx: &Sender<Action>, action: Action) -> anyhow::Result<()> {
    tx.send(action)
        .map_err(|_| anyhow!("Background worker stopped"))
        .context("Failed to dispatch action")
}
