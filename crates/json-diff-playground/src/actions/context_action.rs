//! Context-sensitive actions
//!
//! Semantic actions that views interpret differently. `Confirm` (Enter) means:
//! - Result pane: expand or collapse the node under the cursor
//! - Example picker: load the highlighted example
//! - Settings: change the highlighted setting

/// Semantic actions that views interpret differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action on focused item (Enter key)
    Confirm,
    /// Toggle state of focused item (Space key)
    ToggleSelect,
}
