//! Text input actions - shared across screens with text input capability

/// Caret movement inside a multi-line text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretMove {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
}

/// Generic text input actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Text pasted from the terminal (bracketed paste)
    Paste(String),
    /// Remove the character before the caret
    Backspace,
    /// Remove the character under the caret
    Delete,
    /// Clear the current line (Ctrl+U)
    ClearLine,
    /// Move the caret
    MoveCaret(CaretMove),
    /// Escape pressed - typically closes or clears
    Escape,
    /// Enter pressed - confirm or line break, depending on the view
    Confirm,
}
