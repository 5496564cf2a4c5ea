//! Result pane state

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPaneState {
    /// Index of the highlighted rendered line
    pub cursor: usize,
}
