//! Workspace Middleware
//!
//! Owns the [`WorkspaceController`] and the editor carets. Every change to the
//! workspace happens here, on the background thread, one action at a time;
//! afterwards a fresh [`WorkspaceFrame`] is published for the reducers.

use crate::actions::{
    Action, BootstrapAction, EditorAction, Event, ResultPaneAction, SettingsAction,
    StatusBarAction,
};
use crate::dispatcher::Dispatcher;
use crate::domain_models::TextEdit;
use crate::middleware::Middleware;
use crate::state::{AppState, EditorCarets, WorkspaceFrame};
use json_diff_config::{AppConfig, EditorTheme};
use json_diff_viewer::{RenderConfig, RenderTheme, StructuralDiffEngine, TreeRenderSurface};
use json_diff_workspace::{
    FsFileAdapter, Side, WorkspaceAction, WorkspaceController, WorkspaceEvent,
};
use std::sync::Arc;

pub struct WorkspaceMiddleware {
    controller: WorkspaceController,
    carets: EditorCarets,
    render_config: RenderConfig,
}

impl WorkspaceMiddleware {
    pub fn new() -> Self {
        let render_config = RenderConfig::default();
        let controller = WorkspaceController::new(
            Arc::new(StructuralDiffEngine::new()),
            Box::new(TreeRenderSurface::new(render_config)),
            Arc::new(FsFileAdapter::new(AppConfig::default().export_dir)),
        );
        Self::with_controller(controller)
    }

    pub fn with_controller(controller: WorkspaceController) -> Self {
        let render_config = controller.surface().config();
        Self {
            controller,
            carets: EditorCarets::default(),
            render_config,
        }
    }

    fn publish(&self, dispatcher: &Dispatcher) {
        dispatcher.dispatch(Action::WorkspaceSynced(Box::new(WorkspaceFrame {
            snapshot: self.controller.snapshot(),
            carets: self.carets,
        })));
    }

    fn run(&mut self, action: WorkspaceAction, dispatcher: &Dispatcher) {
        let source = action.name();
        let events = self.controller.dispatch(action);
        for event in events {
            self.react(event, source, dispatcher);
        }
        self.publish(dispatcher);
    }

    fn react(&mut self, event: WorkspaceEvent, source: &str, dispatcher: &Dispatcher) {
        let status = match event {
            WorkspaceEvent::SlotChanged(side) => {
                let len = self.controller.state().slot(side).text().chars().count();
                self.carets.set(side, self.carets.get(side).min(len));
                None
            }
            WorkspaceEvent::ExampleLoaded { id } => {
                self.carets = EditorCarets::default();
                let name = self
                    .controller
                    .catalog()
                    .by_id(id)
                    .map(|example| example.name)
                    .unwrap_or(id);
                Some(StatusBarAction::info(format!("Loaded example \"{name}\""), source))
            }
            WorkspaceEvent::ImportRequested { side, file } => {
                let message = format!("Importing {} into {}", file.name(), side.label());
                dispatcher.dispatch(Action::event(Event::ImportRequested { side, file }));
                Some(StatusBarAction::running(message, source))
            }
            WorkspaceEvent::Imported { side } => {
                self.carets.set(side, 0);
                Some(StatusBarAction::success(
                    format!("Imported into {}", side.label()),
                    source,
                ))
            }
            WorkspaceEvent::Compared(stats) => {
                let message = if stats.has_changes() {
                    format!(
                        "{} added, {} deleted, {} modified",
                        stats.added, stats.deleted, stats.modified
                    )
                } else {
                    "Documents are identical".to_string()
                };
                Some(StatusBarAction::success(message, source))
            }
            WorkspaceEvent::Exported { format, path } => Some(StatusBarAction::success(
                format!("{} saved to {}", format.label(), path.display()),
                source,
            )),
            WorkspaceEvent::Failed(error) => Some(StatusBarAction::error(error.to_string(), source)),
            WorkspaceEvent::Redrawn => None,
            WorkspaceEvent::Ignored(reason) => {
                log::debug!("WorkspaceMiddleware: {} ignored ({})", source, reason);
                None
            }
        };
        if let Some(status) = status {
            dispatcher.dispatch(Action::StatusBar(status));
        }
    }

    fn edit(&mut self, side: Side, edit: &EditorAction, dispatcher: &Dispatcher) {
        if *edit == EditorAction::Format {
            self.run(WorkspaceAction::Format(side), dispatcher);
            return;
        }
        let text = self.controller.state().slot(side).text();
        let outcome = TextEdit::apply(text, self.carets.get(side), edit);
        self.carets.set(side, outcome.caret);
        match outcome.text {
            Some(text) => self.run(WorkspaceAction::Edit { side, text }, dispatcher),
            None => self.publish(dispatcher),
        }
    }

    fn reconfigure(&mut self, dispatcher: &Dispatcher) {
        self.run(WorkspaceAction::SetRenderConfig(self.render_config), dispatcher);
    }
}

impl Default for WorkspaceMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for WorkspaceMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Workspace(workspace_action) => {
                self.run(workspace_action.clone(), dispatcher);
                false
            }
            Action::Editor(edit) => {
                match state.focus.side() {
                    Some(side) => self.edit(side, edit, dispatcher),
                    None => log::debug!("Editor action without a focused editor: {:?}", edit),
                }
                false
            }
            Action::ResultPane(ResultPaneAction::ToggleNode) => {
                self.run(
                    WorkspaceAction::ToggleNode(state.result_pane.cursor),
                    dispatcher,
                );
                false
            }
            Action::Bootstrap(BootstrapAction::ConfigLoaded(config)) => {
                self.controller
                    .set_files(Arc::new(FsFileAdapter::new(&config.export_dir)));
                self.render_config.expand_depth = config.expand_depth;
                self.render_config.show_unchanged = config.show_unchanged;
                self.reconfigure(dispatcher);
                true
            }
            Action::Settings(SettingsAction::Applied(prefs)) => {
                let theme = match prefs.theme {
                    EditorTheme::Light => RenderTheme::Light,
                    EditorTheme::Dark => RenderTheme::Dark,
                };
                if theme != self.render_config.theme {
                    self.render_config.theme = theme;
                    self.reconfigure(dispatcher);
                }
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CaretMove;
    use crate::state::{Pane, StatusKind};
    use json_diff_config::EditorPreferences;
    use json_diff_workspace::{Outcome, WorkspaceError};
    use pretty_assertions::assert_eq;
    use std::sync::mpsc::{self, Receiver};

    struct Fixture {
        middleware: WorkspaceMiddleware,
        dispatcher: Dispatcher,
        rx: Receiver<Action>,
        state: AppState,
        _export_dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let export_dir = tempfile::tempdir().unwrap();
            let controller = WorkspaceController::new(
                Arc::new(StructuralDiffEngine::new()),
                Box::new(TreeRenderSurface::new(RenderConfig::default())),
                Arc::new(FsFileAdapter::new(export_dir.path())),
            );
            let (tx, rx) = mpsc::channel();
            Self {
                middleware: WorkspaceMiddleware::with_controller(controller),
                dispatcher: Dispatcher::new(tx),
                rx,
                state: AppState::default(),
                _export_dir: export_dir,
            }
        }

        fn send(&mut self, action: Action) -> Vec<Action> {
            self.middleware.handle(&action, &self.state, &self.dispatcher);
            self.rx.try_iter().collect()
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.send(Action::Editor(EditorAction::Insert(c.to_string())));
            }
        }
    }

    fn last_frame(actions: &[Action]) -> WorkspaceFrame {
        actions
            .iter()
            .rev()
            .find_map(|a| match a {
                Action::WorkspaceSynced(frame) => Some((**frame).clone()),
                _ => None,
            })
            .expect("no frame published")
    }

    fn statuses(actions: &[Action]) -> Vec<(StatusKind, String)> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::StatusBar(StatusBarAction::Push { kind, message, .. }) => {
                    Some((*kind, message.clone()))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_typing_edits_the_focused_editor() {
        let mut fx = Fixture::new();
        fx.type_text("{}");
        fx.state.focus = Pane::New;
        let actions = fx.send(Action::Editor(EditorAction::Insert("[1]".into())));

        let frame = last_frame(&actions);
        assert_eq!(frame.snapshot.state.slot(Side::Left).text(), "{}");
        assert_eq!(frame.snapshot.state.slot(Side::Right).text(), "[1]");
        assert_eq!(frame.carets, EditorCarets { left: 2, right: 3 });
    }

    #[test]
    fn test_caret_moves_publish_without_editing() {
        let mut fx = Fixture::new();
        fx.type_text("ab");
        let actions = fx.send(Action::Editor(EditorAction::MoveCaret(CaretMove::Left)));

        let frame = last_frame(&actions);
        assert_eq!(frame.carets.left, 1);
        assert_eq!(frame.snapshot.state.slot(Side::Left).text(), "ab");
    }

    #[test]
    fn test_editor_actions_ignored_on_result_pane() {
        let mut fx = Fixture::new();
        fx.state.focus = Pane::Result;
        let actions = fx.send(Action::Editor(EditorAction::Insert("x".into())));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_compare_example_reports_stats() {
        let mut fx = Fixture::new();
        let loaded = fx.send(Action::Workspace(WorkspaceAction::SelectExample(
            "basic".into(),
        )));
        assert_eq!(statuses(&loaded)[0].0, StatusKind::Info);

        let actions = fx.send(Action::Workspace(WorkspaceAction::Compare));
        let frame = last_frame(&actions);
        assert!(frame.snapshot.state.result().is_some());
        assert!(!frame.snapshot.lines.is_empty());
        assert_eq!(
            statuses(&actions),
            vec![(
                StatusKind::Success,
                "1 added, 0 deleted, 2 modified".to_string()
            )]
        );
    }

    #[test]
    fn test_failed_compare_shows_error_status() {
        let mut fx = Fixture::new();
        fx.type_text("{");
        let actions = fx.send(Action::Workspace(WorkspaceAction::Compare));

        let frame = last_frame(&actions);
        assert!(matches!(
            frame.snapshot.state.outcome(),
            Outcome::Errored(WorkspaceError::Validation {
                side: Side::Left,
                ..
            })
        ));
        assert_eq!(statuses(&actions)[0].0, StatusKind::Error);
    }

    #[test]
    fn test_import_request_becomes_event() {
        let mut fx = Fixture::new();
        let file = json_diff_workspace::PickedFile::new("/tmp/left.json");
        let actions = fx.send(Action::Workspace(WorkspaceAction::Import {
            side: Side::Left,
            file: file.clone(),
        }));

        assert!(actions.iter().any(|a| matches!(
            a,
            Action::Event(Event::ImportRequested { side: Side::Left, file: f }) if *f == file
        )));
        assert!(last_frame(&actions)
            .snapshot
            .state
            .is_import_pending(Side::Left));
    }

    #[test]
    fn test_format_uses_focused_side() {
        let mut fx = Fixture::new();
        fx.state.focus = Pane::New;
        fx.type_text("{\"a\":1}");
        let actions = fx.send(Action::Editor(EditorAction::Format));

        let frame = last_frame(&actions);
        assert_eq!(
            frame.snapshot.state.slot(Side::Right).text(),
            "{\n  \"a\": 1\n}"
        );
    }

    #[test]
    fn test_dark_preferences_reconfigure_renderer() {
        let mut fx = Fixture::new();
        let prefs = EditorPreferences {
            theme: EditorTheme::Dark,
            ..EditorPreferences::default()
        };
        let actions = fx.send(Action::Settings(SettingsAction::Applied(prefs)));
        assert_eq!(
            last_frame(&actions).snapshot.render_config.theme,
            RenderTheme::Dark
        );

        // Same theme again: nothing to redraw
        let again = fx.send(Action::Settings(SettingsAction::Applied(prefs)));
        assert!(again.is_empty());
    }

    #[test]
    fn test_config_sets_tree_options() {
        let mut fx = Fixture::new();
        let config = AppConfig {
            expand_depth: 1,
            show_unchanged: false,
            ..AppConfig::default()
        };
        let actions = fx.send(Action::Bootstrap(BootstrapAction::ConfigLoaded(config)));
        let render_config = last_frame(&actions).snapshot.render_config;
        assert_eq!(render_config.expand_depth, 1);
        assert!(!render_config.show_unchanged);
    }
}
