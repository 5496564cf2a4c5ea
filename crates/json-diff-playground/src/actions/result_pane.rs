//! Result pane actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPaneAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Expand or collapse the node under the cursor
    ToggleNode,
}
