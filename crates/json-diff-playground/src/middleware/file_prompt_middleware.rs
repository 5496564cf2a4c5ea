//! File Prompt Middleware
//!
//! Drives the import prompt: lists directories, walks into the one the user
//! confirms and hands a confirmed file to the workspace as an import.

use crate::actions::{Action, FilePromptAction, GlobalAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, FileListing, PromptEntry};
use crate::views::FilePromptView;
use json_diff_workspace::{list_candidates, AcceptPattern, PickedFile, WorkspaceAction};
use std::path::{Path, PathBuf};

pub struct FilePromptMiddleware {
    /// Directory the prompt opens in; follows the user around
    dir: PathBuf,
}

impl FilePromptMiddleware {
    pub fn new() -> Self {
        let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_start_dir(dir)
    }

    pub fn with_start_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn list(&mut self, dir: &Path, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let accept = AcceptPattern::new(&state.app_config.accept);
        let candidates = match list_candidates(dir, &accept) {
            Ok(candidates) => candidates,
            Err(e) => {
                log::error!("FilePromptMiddleware: {}", e);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    e.to_string(),
                    "Import",
                )));
                return false;
            }
        };

        let mut entries = Vec::with_capacity(candidates.len() + 1);
        if let Some(parent) = dir.parent() {
            entries.push(PromptEntry::parent(parent));
        }
        entries.extend(candidates.into_iter().map(PromptEntry::from_path));

        self.dir = dir.to_path_buf();
        dispatcher.dispatch(Action::FilePrompt(FilePromptAction::Opened {
            side: state.target_side(),
            listing: FileListing {
                dir: dir.to_path_buf(),
                entries,
            },
        }));
        true
    }

    fn confirm(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        let Some(entry) = state.file_prompt.selected_entry().cloned() else {
            log::debug!("FilePromptMiddleware: nothing selected");
            return;
        };

        if entry.is_dir {
            self.list(&entry.path, state, dispatcher);
            return;
        }

        log::info!(
            "FilePromptMiddleware: picked {:?} for {}",
            entry.path,
            state.file_prompt.side
        );
        dispatcher.dispatch(Action::Global(GlobalAction::Close));
        dispatcher.dispatch(Action::Workspace(WorkspaceAction::Import {
            side: state.file_prompt.side,
            file: PickedFile::new(entry.path),
        }));
    }
}

impl Default for FilePromptMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for FilePromptMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::FilePrompt(FilePromptAction::Open) => {
                let dir = self.dir.clone();
                if self.list(&dir, state, dispatcher) {
                    dispatcher.dispatch(Action::Global(GlobalAction::PushView(Box::new(
                        FilePromptView::new(),
                    ))));
                }
                false
            }
            Action::FilePrompt(FilePromptAction::Confirm) => {
                self.confirm(state, dispatcher);
                false
            }
            Action::FilePrompt(FilePromptAction::Cancel) => {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FilePromptState;
    use crate::state::Pane;
    use json_diff_workspace::Side;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::sync::mpsc;

    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("left.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("nested").join("inner.json"), "[]").unwrap();
        dir
    }

    fn run(middleware: &mut FilePromptMiddleware, action: FilePromptAction, state: &AppState) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let forward = middleware.handle(&Action::FilePrompt(action), state, &dispatcher);
        assert!(!forward);
        rx.try_iter().collect()
    }

    fn opened(actions: &[Action]) -> (Side, FileListing) {
        actions
            .iter()
            .find_map(|a| match a {
                Action::FilePrompt(FilePromptAction::Opened { side, listing }) => {
                    Some((*side, listing.clone()))
                }
                _ => None,
            })
            .expect("no listing")
    }

    #[test]
    fn test_open_lists_directory_for_focused_editor() {
        let dir = fixture_dir();
        let mut middleware = FilePromptMiddleware::with_start_dir(dir.path());
        let state = AppState {
            focus: Pane::New,
            ..Default::default()
        };

        let actions = run(&mut middleware, FilePromptAction::Open, &state);
        let (side, listing) = opened(&actions);

        assert_eq!(side, Side::Right);
        let labels: Vec<&str> = listing.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["../", "nested/", "left.json"]);
        assert!(actions
            .iter()
            .any(|a| matches!(a, Action::Global(GlobalAction::PushView(_)))));
    }

    #[test]
    fn test_confirm_directory_relists() {
        let dir = fixture_dir();
        let mut middleware = FilePromptMiddleware::with_start_dir(dir.path());
        let state = AppState {
            file_prompt: FilePromptState {
                listing: FileListing {
                    dir: dir.path().to_path_buf(),
                    entries: vec![PromptEntry::from_path(dir.path().join("nested"))],
                },
                ..Default::default()
            },
            ..Default::default()
        };

        let actions = run(&mut middleware, FilePromptAction::Confirm, &state);
        let (_, listing) = opened(&actions);
        assert_eq!(listing.dir, dir.path().join("nested"));
        assert_eq!(listing.entries[1].label, "inner.json");
    }

    #[test]
    fn test_confirm_file_imports_into_prompt_side() {
        let dir = fixture_dir();
        let file = dir.path().join("left.json");
        let mut middleware = FilePromptMiddleware::with_start_dir(dir.path());
        let state = AppState {
            file_prompt: FilePromptState {
                side: Side::Right,
                listing: FileListing {
                    dir: dir.path().to_path_buf(),
                    entries: vec![PromptEntry::from_path(file.clone())],
                },
                ..Default::default()
            },
            ..Default::default()
        };

        let actions = run(&mut middleware, FilePromptAction::Confirm, &state);
        assert!(matches!(actions[0], Action::Global(GlobalAction::Close)));
        match &actions[1] {
            Action::Workspace(WorkspaceAction::Import { side, file: picked }) => {
                assert_eq!(*side, Side::Right);
                assert_eq!(picked.path, file);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_directory_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut middleware = FilePromptMiddleware::with_start_dir(dir.path().join("gone"));

        let actions = run(&mut middleware, FilePromptAction::Open, &AppState::default());
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            actions[0],
            Action::StatusBar(StatusBarAction::Push { .. })
        ));
    }
}
