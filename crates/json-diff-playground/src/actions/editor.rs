//! Editor actions
//!
//! Applied to the focused editor pane by the workspace middleware.

use super::text_input::CaretMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Insert text at the caret
    Insert(String),
    Newline,
    Backspace,
    Delete,
    ClearLine,
    MoveCaret(CaretMove),
    /// Pretty-print the whole text
    Format,
}
