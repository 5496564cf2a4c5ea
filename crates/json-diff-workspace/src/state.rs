//! Authoritative workspace state.

use crate::error::WorkspaceError;
use crate::side::{InputSlot, Side};
use json_diff_viewer::DiffResult;
use std::collections::HashSet;

/// What the last relevant action left behind.
///
/// A result and an error can never be present at the same time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Outcome {
    #[default]
    Idle,
    Errored(WorkspaceError),
    Resulted(DiffResult),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceState {
    pub(crate) left: InputSlot,
    pub(crate) right: InputSlot,
    pub(crate) outcome: Outcome,
    pub(crate) selected_example: Option<&'static str>,
    pub(crate) pending_imports: HashSet<Side>,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self {
            left: InputSlot::new(Side::Left),
            right: InputSlot::new(Side::Right),
            outcome: Outcome::Idle,
            selected_example: None,
            pending_imports: HashSet::new(),
        }
    }
}

impl WorkspaceState {
    pub fn slot(&self, side: Side) -> &InputSlot {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn slot_mut(&mut self, side: Side) -> &mut InputSlot {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn result(&self) -> Option<&DiffResult> {
        match &self.outcome {
            Outcome::Resulted(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&WorkspaceError> {
        match &self.outcome {
            Outcome::Errored(error) => Some(error),
            _ => None,
        }
    }

    pub fn selected_example(&self) -> Option<&'static str> {
        self.selected_example
    }

    pub fn is_import_pending(&self, side: Side) -> bool {
        self.pending_imports.contains(&side)
    }

    /// Whether the export actions have something to work with.
    pub fn can_export(&self) -> bool {
        self.result().is_some()
    }
}
