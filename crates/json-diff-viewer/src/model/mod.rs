//! Data models for structural diff results.

mod diff;

pub use diff::{ChangeKind, ContainerKind, DiffNode, DiffResult, DiffStats, PathSegment};
