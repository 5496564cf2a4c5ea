//! Event types
//!
//! Events are facts that have occurred and are broadcast to the middleware
//! chain. They never reach the reducers.

use json_diff_workspace::{PickedFile, Side};

/// Events that re-enter the middleware chain
#[derive(Debug, Clone)]
pub enum Event {
    /// The workspace accepted an import and waits for the file contents
    ImportRequested { side: Side, file: PickedFile },
}
