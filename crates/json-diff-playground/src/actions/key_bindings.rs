//! Key bindings help panel actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBindingsAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
}
