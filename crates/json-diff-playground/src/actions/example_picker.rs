//! Example picker actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamplePickerAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Load the highlighted example into both editors
    Confirm,
}
