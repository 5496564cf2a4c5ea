//! Events emitted by the workspace controller.

use crate::error::WorkspaceError;
use crate::export::ExportFormat;
use crate::file_io::PickedFile;
use crate::side::Side;
use json_diff_viewer::DiffStats;
use std::path::PathBuf;

/// Observable effects of a dispatched action.
///
/// The controller performs no I/O on its own except the export hand-off;
/// [`ImportRequested`](WorkspaceEvent::ImportRequested) asks the caller to
/// read the file and dispatch the completion.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceEvent {
    /// Text of an input changed.
    SlotChanged(Side),

    /// An example was loaded into both inputs.
    ExampleLoaded { id: &'static str },

    /// The caller should read `file` and dispatch `ImportFinished`.
    ImportRequested { side: Side, file: PickedFile },

    /// A file was read into an input.
    Imported { side: Side },

    /// A compare produced a result.
    Compared(DiffStats),

    /// A file was written.
    Exported { format: ExportFormat, path: PathBuf },

    /// The action failed; the error is now the current outcome.
    Failed(WorkspaceError),

    /// The rendered output changed without a new result.
    Redrawn,

    /// The action had no effect.
    Ignored(&'static str),
}
