//! Import Middleware
//!
//! Reads picked files on a tokio runtime so slow disks never stall the
//! middleware chain. The outcome comes back as
//! [`WorkspaceAction::ImportFinished`], which the workspace middleware applies.
//!
//! [`WorkspaceAction::ImportFinished`]: json_diff_workspace::WorkspaceAction::ImportFinished

use crate::actions::{Action, Event};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::Context;
use json_diff_workspace::{read_import, FileAdapter, FsFileAdapter};
use std::sync::Arc;
use tokio::runtime::Runtime;

pub struct ImportMiddleware {
    /// Tokio runtime for file reads
    runtime: Runtime,
    files: Arc<dyn FileAdapter>,
}

impl ImportMiddleware {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_files(Arc::new(FsFileAdapter::new(".")))
    }

    pub fn with_files(files: Arc<dyn FileAdapter>) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime for imports")?;
        Ok(Self { runtime, files })
    }
}

impl Middleware for ImportMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Event(Event::ImportRequested { side, file }) = action {
            let files = Arc::clone(&self.files);
            let dispatcher = dispatcher.clone();
            let side = *side;
            let file = file.clone();

            self.runtime.spawn(async move {
                log::debug!("ImportMiddleware: reading {:?}", file.path);
                let finished = read_import(files.as_ref(), side, &file).await;
                dispatcher.dispatch(Action::Workspace(finished));
            });
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_diff_workspace::{FileError, PickedFile, Side, WorkspaceAction};
    use pretty_assertions::assert_eq;
    use std::sync::mpsc;
    use std::time::Duration;

    fn import(file: PickedFile) -> WorkspaceAction {
        let mut middleware = ImportMiddleware::new().unwrap();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let forward = middleware.handle(
            &Action::event(Event::ImportRequested {
                side: Side::Right,
                file,
            }),
            &AppState::default(),
            &dispatcher,
        );
        assert!(forward);

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            Action::Workspace(action) => action,
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_reads_file_in_background() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.json");
        std::fs::write(&path, "{\"a\": 1}").unwrap();

        assert_eq!(
            import(PickedFile::new(&path)),
            WorkspaceAction::ImportFinished {
                side: Side::Right,
                result: Ok("{\"a\": 1}".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_file_finishes_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let action = import(PickedFile::new(dir.path().join("missing.json")));

        assert!(matches!(
            action,
            WorkspaceAction::ImportFinished {
                side: Side::Right,
                result: Err(FileError::Read { .. }),
            }
        ));
    }
}
