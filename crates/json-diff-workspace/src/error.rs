//! User-facing failures recorded by the workspace controller.

use crate::side::Side;
use thiserror::Error;

/// Every failure the controller can record.
///
/// None of these escape [`WorkspaceController::dispatch`]; each becomes the
/// single error message shown to the user.
///
/// [`WorkspaceController::dispatch`]: crate::WorkspaceController::dispatch
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkspaceError {
    /// One input is not well-formed JSON.
    #[error("{side} JSON has a syntax error: {message}")]
    Validation {
        side: Side,
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    /// Both inputs are valid but at least one is blank.
    #[error("Please enter JSON in both editors to compare")]
    NothingToCompare,

    /// Parsing or diffing failed after validation passed.
    #[error("Comparison failed: {0}")]
    Comparison(String),

    /// A file could not be read into an input.
    #[error("Import failed: {0}")]
    Import(String),

    /// Export requested without a result on display.
    #[error("No diff result to export")]
    NothingToExport,

    /// The export hand-off failed.
    #[error("Export failed: {0}")]
    Export(String),
}

/// Broad classification of a [`WorkspaceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Comparison,
    Import,
    Export,
}

impl WorkspaceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::NothingToCompare | Self::Comparison(_) => ErrorKind::Comparison,
            Self::Import(_) => ErrorKind::Import,
            Self::NothingToExport | Self::Export(_) => ErrorKind::Export,
        }
    }

    /// Side the error concerns, for validation errors.
    pub fn side(&self) -> Option<Side> {
        match self {
            Self::Validation { side, .. } => Some(*side),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_side() {
        let err = WorkspaceError::Validation {
            side: Side::Left,
            message: "EOF while parsing an object at line 1 column 6".into(),
            line: Some(1),
            column: Some(6),
        };
        assert_eq!(
            err.to_string(),
            "Original JSON has a syntax error: EOF while parsing an object at line 1 column 6"
        );
        assert_eq!(err.side(), Some(Side::Left));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(WorkspaceError::NothingToCompare.kind(), ErrorKind::Comparison);
        assert_eq!(WorkspaceError::NothingToExport.kind(), ErrorKind::Export);
        assert_eq!(
            WorkspaceError::Import("denied".into()).to_string(),
            "Import failed: denied"
        );
    }
}
