//! Editor Pane View Model
//!
//! Pre-computes what one editor pane shows: the visible slice of the text,
//! the caret, and the live validation badge.

use crate::domain_models::caret_position;
use crate::state::{AppState, Pane};
use json_diff_workspace::Side;

/// "Syntax error" badge shown while the text does not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxBadge {
    pub message: String,
    /// 1-based `line, column` of the error, when known
    pub location: Option<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPaneViewModel {
    pub title: String,
    pub focused: bool,
    /// Lines in the viewport, already shifted by `first_column`
    pub lines: Vec<String>,
    pub first_line: usize,
    pub first_column: usize,
    pub total_lines: usize,
    /// Zero-based caret line and column
    pub caret: (usize, usize),
    /// Status-line position, e.g. "Ln 3, Col 7"
    pub position: String,
    pub badge: Option<SyntaxBadge>,
    pub importing: bool,
    pub minimap: bool,
    pub is_empty: bool,
}

impl EditorPaneViewModel {
    /// Build the pane for `side` with a viewport of `width` x `height` cells
    pub fn from_state(state: &AppState, side: Side, width: usize, height: usize) -> Self {
        let slot = state.workspace.snapshot.state.slot(side);
        let text = slot.text();
        let caret = caret_position(text, state.carets().get(side));

        // Keep the caret inside the viewport
        let first_line = caret.0.saturating_sub(height.saturating_sub(1));
        let first_column = caret.1.saturating_sub(width.saturating_sub(1));

        let all_lines: Vec<&str> = text.split('\n').collect();
        let lines = all_lines
            .iter()
            .skip(first_line)
            .take(height)
            .map(|line| line.chars().skip(first_column).take(width).collect())
            .collect();

        let verdict = slot.verdict();
        let badge = (!verdict.valid).then(|| SyntaxBadge {
            message: verdict.message.clone().unwrap_or_default(),
            location: verdict.location(),
        });

        Self {
            title: format!(" {} JSON ", side.label()),
            focused: state.focus == Pane::for_side(side),
            lines,
            first_line,
            first_column,
            total_lines: all_lines.len(),
            caret,
            position: format!("Ln {}, Col {}", caret.0 + 1, caret.1 + 1),
            badge,
            importing: state.workspace.snapshot.state.is_import_pending(side),
            minimap: state.preferences.minimap,
            is_empty: text.is_empty(),
        }
    }

    /// Caret cell relative to the viewport
    pub fn caret_in_viewport(&self) -> (usize, usize) {
        (
            self.caret.0 - self.first_line,
            self.caret.1 - self.first_column,
        )
    }
}
