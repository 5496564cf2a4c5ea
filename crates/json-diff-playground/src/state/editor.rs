//! Editor carets and the workspace frame the reducers receive

use json_diff_workspace::{Side, WorkspaceSnapshot};

/// Caret of each editor, as a character offset into its text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorCarets {
    pub left: usize,
    pub right: usize,
}

impl EditorCarets {
    pub fn get(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set(&mut self, side: Side, caret: usize) {
        match side {
            Side::Left => self.left = caret,
            Side::Right => self.right = caret,
        }
    }
}

/// Everything the workspace middleware publishes after a change
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkspaceFrame {
    pub snapshot: WorkspaceSnapshot,
    pub carets: EditorCarets,
}
