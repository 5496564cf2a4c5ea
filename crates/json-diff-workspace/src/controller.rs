//! The diff workflow controller.

use crate::action::{read_import, WorkspaceAction};
use crate::error::WorkspaceError;
use crate::event::WorkspaceEvent;
use crate::examples::ExampleCatalog;
use crate::export::{data_content, document_content, timestamped_filename, ExportFormat};
use crate::file_io::{FileAdapter, FileError, PickedFile};
use crate::side::Side;
use crate::state::{Outcome, WorkspaceState};
use crate::validator::{format_json, parse_document};
use chrono::{DateTime, Utc};
use json_diff_viewer::{DiffEngine, DiffResult, RenderConfig, RenderSurface, RenderedLine};
use std::fmt;
use std::sync::Arc;

const FORMAT_INDENT: usize = 2;

/// Source of "now" for export filenames.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Read-only copy of everything a view needs to draw the workspace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkspaceSnapshot {
    pub state: WorkspaceState,
    pub lines: Vec<RenderedLine>,
    pub render_config: RenderConfig,
}

/// Single owner of the workspace state.
///
/// Every mutation goes through [`dispatch`](Self::dispatch), which keeps the
/// result and the error mutually exclusive and keeps the render surface in
/// step with the result: the surface shows output exactly while a result is
/// present.
pub struct WorkspaceController {
    state: WorkspaceState,
    catalog: ExampleCatalog,
    engine: Arc<dyn DiffEngine>,
    surface: Box<dyn RenderSurface>,
    files: Arc<dyn FileAdapter>,
    clock: Clock,
}

impl fmt::Debug for WorkspaceController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkspaceController")
            .field("state", &self.state)
            .field("engine", &self.engine)
            .field("surface", &self.surface)
            .field("files", &self.files)
            .finish_non_exhaustive()
    }
}

impl WorkspaceController {
    pub fn new(
        engine: Arc<dyn DiffEngine>,
        surface: Box<dyn RenderSurface>,
        files: Arc<dyn FileAdapter>,
    ) -> Self {
        Self {
            state: WorkspaceState::default(),
            catalog: ExampleCatalog::builtin(),
            engine,
            surface,
            files,
            clock: Arc::new(Utc::now),
        }
    }

    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn surface(&self) -> &dyn RenderSurface {
        self.surface.as_ref()
    }

    pub fn catalog(&self) -> &ExampleCatalog {
        &self.catalog
    }

    /// Adapter used for imports, for callers that read files off-thread.
    pub fn files(&self) -> Arc<dyn FileAdapter> {
        Arc::clone(&self.files)
    }

    /// Swap the file adapter, e.g. after the export directory was configured.
    pub fn set_files(&mut self, files: Arc<dyn FileAdapter>) {
        self.files = files;
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            state: self.state.clone(),
            lines: self.surface.lines().to_vec(),
            render_config: self.surface.config(),
        }
    }

    /// Apply one action and report what happened. Never fails: errors are
    /// recorded as the current outcome and reported as
    /// [`WorkspaceEvent::Failed`].
    pub fn dispatch(&mut self, action: WorkspaceAction) -> Vec<WorkspaceEvent> {
        log::debug!("Workspace action: {}", action.name());
        match action {
            WorkspaceAction::Edit { side, text } => self.edit(side, text),
            WorkspaceAction::SelectExample(id) => self.select_example(&id),
            WorkspaceAction::Import { side, file } => self.start_import(side, file),
            WorkspaceAction::ImportFinished { side, result } => self.finish_import(side, result),
            WorkspaceAction::Compare => self.compare(),
            WorkspaceAction::ExportData => self.export(ExportFormat::Data),
            WorkspaceAction::ExportDocument => self.export(ExportFormat::Document),
            WorkspaceAction::Format(side) => self.format(side),
            WorkspaceAction::ToggleNode(line) => self.toggle(line),
            WorkspaceAction::SetRenderConfig(config) => {
                self.surface.configure(config);
                vec![WorkspaceEvent::Redrawn]
            }
        }
    }

    /// Import `file` into `side` and wait for it to finish.
    pub async fn import_file(&mut self, side: Side, file: PickedFile) -> Vec<WorkspaceEvent> {
        let mut events = self.dispatch(WorkspaceAction::Import {
            side,
            file: file.clone(),
        });
        let requested = events
            .iter()
            .any(|e| matches!(e, WorkspaceEvent::ImportRequested { .. }));
        if requested {
            let files = self.files();
            let action = read_import(files.as_ref(), side, &file).await;
            events.extend(self.dispatch(action));
        }
        events
    }

    fn edit(&mut self, side: Side, text: String) -> Vec<WorkspaceEvent> {
        self.state.slot_mut(side).set_text(text);
        self.state.selected_example = None;
        vec![WorkspaceEvent::SlotChanged(side)]
    }

    fn select_example(&mut self, id: &str) -> Vec<WorkspaceEvent> {
        if id.is_empty() {
            return vec![WorkspaceEvent::Ignored("no example selected")];
        }
        let Some(example) = self.catalog.by_id(id) else {
            log::warn!("Unknown example id: {}", id);
            return vec![WorkspaceEvent::Ignored("unknown example")];
        };

        self.state.left.set_text(example.left);
        self.state.right.set_text(example.right);
        self.reset();
        self.state.selected_example = Some(example.id);

        log::info!("Loaded example {}", example.id);
        vec![
            WorkspaceEvent::SlotChanged(Side::Left),
            WorkspaceEvent::SlotChanged(Side::Right),
            WorkspaceEvent::ExampleLoaded { id: example.id },
        ]
    }

    fn start_import(&mut self, side: Side, file: PickedFile) -> Vec<WorkspaceEvent> {
        if !self.state.pending_imports.insert(side) {
            log::debug!("Import into {} already in progress, ignoring", side);
            return vec![WorkspaceEvent::Ignored("import already in progress")];
        }
        log::info!("Importing {:?} into {}", file.path, side);
        vec![WorkspaceEvent::ImportRequested { side, file }]
    }

    fn finish_import(&mut self, side: Side, result: Result<String, FileError>) -> Vec<WorkspaceEvent> {
        if !self.state.pending_imports.remove(&side) {
            log::debug!("Import into {} finished without being requested", side);
        }

        match result {
            Ok(text) => {
                self.state.slot_mut(side).set_text(text);
                self.state.selected_example = None;
                self.reset();
                vec![
                    WorkspaceEvent::SlotChanged(side),
                    WorkspaceEvent::Imported { side },
                ]
            }
            Err(e) => self.fail(WorkspaceError::Import(e.to_string())),
        }
    }

    fn compare(&mut self) -> Vec<WorkspaceEvent> {
        self.reset();

        for side in [Side::Left, Side::Right] {
            let verdict = self.state.slot(side).verdict();
            if !verdict.valid {
                let error = WorkspaceError::Validation {
                    side,
                    message: verdict.message.clone().unwrap_or_default(),
                    line: verdict.line,
                    column: verdict.column,
                };
                return self.fail(error);
            }
        }

        if self.state.left.is_blank() || self.state.right.is_blank() {
            return self.fail(WorkspaceError::NothingToCompare);
        }

        match self.run_diff() {
            Ok(result) => {
                let stats = result.stats;
                log::info!(
                    "Compared: +{} -{} ~{} ={}",
                    stats.added,
                    stats.deleted,
                    stats.modified,
                    stats.unchanged
                );
                self.surface.render(&result);
                self.state.outcome = Outcome::Resulted(result);
                vec![WorkspaceEvent::Compared(stats)]
            }
            Err(error) => self.fail(error),
        }
    }

    fn run_diff(&self) -> Result<DiffResult, WorkspaceError> {
        let parse = |side: Side| {
            parse_document(self.state.slot(side).text())
                .map_err(|e| WorkspaceError::Comparison(e.to_string()))
        };
        let before = parse(Side::Left)?;
        let after = parse(Side::Right)?;
        self.engine
            .diff(&before, &after)
            .map_err(|e| WorkspaceError::Comparison(e.to_string()))
    }

    fn export(&mut self, format: ExportFormat) -> Vec<WorkspaceEvent> {
        let content = match self.export_content(format) {
            Ok(content) => content,
            Err(error) => return self.fail(error),
        };

        let filename = timestamped_filename((self.clock)(), format);
        match self.files.save_as(&content, &filename, format.mime()) {
            Ok(path) => {
                log::info!("Exported {} to {:?}", format.label(), path);
                vec![WorkspaceEvent::Exported { format, path }]
            }
            Err(e) => self.fail(WorkspaceError::Export(e.to_string())),
        }
    }

    fn export_content(&self, format: ExportFormat) -> Result<String, WorkspaceError> {
        let result = self.state.result().ok_or(WorkspaceError::NothingToExport)?;
        match format {
            ExportFormat::Data => {
                data_content(result).map_err(|e| WorkspaceError::Export(e.to_string()))
            }
            ExportFormat::Document => {
                let markup = self.surface.markup().ok_or(WorkspaceError::NothingToExport)?;
                Ok(document_content(&markup, self.surface.config().theme))
            }
        }
    }

    fn format(&mut self, side: Side) -> Vec<WorkspaceEvent> {
        let slot = self.state.slot(side);
        if slot.is_blank() || !slot.verdict().valid {
            return vec![WorkspaceEvent::Ignored("nothing to format")];
        }
        let formatted = format_json(slot.text(), FORMAT_INDENT);
        if formatted == slot.text() {
            return vec![WorkspaceEvent::Ignored("already formatted")];
        }
        self.edit(side, formatted)
    }

    fn toggle(&mut self, line: usize) -> Vec<WorkspaceEvent> {
        if self.state.result().is_none() {
            return vec![WorkspaceEvent::Ignored("no result")];
        }
        if self.surface.toggle(line) {
            vec![WorkspaceEvent::Redrawn]
        } else {
            vec![WorkspaceEvent::Ignored("line cannot be folded")]
        }
    }

    /// Back to a clean slate: no result, no error, nothing rendered.
    fn reset(&mut self) {
        self.state.outcome = Outcome::Idle;
        self.surface.clear();
    }

    fn fail(&mut self, error: WorkspaceError) -> Vec<WorkspaceEvent> {
        log::warn!("{}", error);
        self.surface.clear();
        self.state.outcome = Outcome::Errored(error.clone());
        vec![WorkspaceEvent::Failed(error)]
    }
}
