//! File prompt actions
//!
//! The prompt stands in for a native "open file" dialog.

use crate::state::FileListing;
use json_diff_workspace::Side;

#[derive(Debug, Clone)]
pub enum FilePromptAction {
    /// Ask for a file to import into the focused editor
    Open,
    /// A directory listing is ready to be shown
    Opened { side: Side, listing: FileListing },
    /// Filter input
    Char(char),
    Backspace,
    ClearLine,
    NavigateNext,
    NavigatePrevious,
    /// Enter a directory or pick a file
    Confirm,
    /// Dismiss the prompt without picking anything
    Cancel,
}
