//! Diff computation.

mod structural;

pub use structural::StructuralDiffEngine;

use crate::model::DiffResult;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while computing a diff.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiffError {
    /// The documents nest deeper than the engine is willing to walk.
    #[error("documents nest deeper than {0} levels")]
    TooDeep(usize),

    /// Engine specific failure.
    #[error("{0}")]
    Failed(String),
}

/// Computes a structured diff between two parsed documents.
///
/// Implementations must be deterministic: identical inputs produce identical
/// results.
pub trait DiffEngine: Send + Sync + std::fmt::Debug {
    fn diff(&self, before: &Value, after: &Value) -> Result<DiffResult, DiffError>;
}
