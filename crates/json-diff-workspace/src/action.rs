//! Actions accepted by the workspace controller.

use crate::file_io::{FileAdapter, FileError, PickedFile};
use crate::side::Side;
use json_diff_viewer::RenderConfig;

/// Every transition the controller performs.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceAction {
    /// Replace the text of one input.
    Edit { side: Side, text: String },

    /// Load an example into both inputs. Empty or unknown ids are ignored.
    SelectExample(String),

    /// Start importing a picked file into one input.
    Import { side: Side, file: PickedFile },

    /// Completion of a previously started import.
    ImportFinished {
        side: Side,
        result: Result<String, FileError>,
    },

    /// Validate both inputs and diff them.
    Compare,

    /// Save the current result as JSON data.
    ExportData,

    /// Save the rendered output as a standalone HTML document.
    ExportDocument,

    /// Pretty-print one input.
    Format(Side),

    /// Expand or collapse the result node on the given rendered line.
    ToggleNode(usize),

    /// Reconfigure the render surface.
    SetRenderConfig(RenderConfig),
}

impl WorkspaceAction {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Edit { .. } => "Edit",
            Self::SelectExample(_) => "SelectExample",
            Self::Import { .. } => "Import",
            Self::ImportFinished { .. } => "ImportFinished",
            Self::Compare => "Compare",
            Self::ExportData => "ExportData",
            Self::ExportDocument => "ExportDocument",
            Self::Format(_) => "Format",
            Self::ToggleNode(_) => "ToggleNode",
            Self::SetRenderConfig(_) => "SetRenderConfig",
        }
    }
}

/// Read `file` through `files` and wrap the outcome into the action that
/// completes the import.
pub async fn read_import(files: &dyn FileAdapter, side: Side, file: &PickedFile) -> WorkspaceAction {
    let result = files.read_as_text(file).await;
    WorkspaceAction::ImportFinished { side, result }
}
