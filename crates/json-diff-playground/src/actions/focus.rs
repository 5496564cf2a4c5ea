//! Focus actions for the workspace panes

/// Move the focus between the two editors and the result pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAction {
    Next,
    Previous,
}
