//! Core diff data structures.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Aggregate change counts for a diff.
///
/// Only leaves are counted: a scalar, an empty container, or a subtree that
/// exists on one side only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub deleted: usize,
    pub modified: usize,
    pub unchanged: usize,
}

impl DiffStats {
    /// Record one leaf of the given kind.
    pub fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Added => self.added += 1,
            ChangeKind::Deleted => self.deleted += 1,
            ChangeKind::Modified => self.modified += 1,
            ChangeKind::Unchanged => self.unchanged += 1,
        }
    }

    /// Total number of counted leaves.
    pub fn total(&self) -> usize {
        self.added + self.deleted + self.modified + self.unchanged
    }

    /// Whether any leaf differs between the two documents.
    pub fn has_changes(&self) -> bool {
        self.added + self.deleted + self.modified > 0
    }
}

/// Kind of change a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Deleted,
    Modified,
    Unchanged,
}

impl ChangeKind {
    /// Single-character marker used in plain text output.
    pub fn marker(&self) -> char {
        match self {
            Self::Added => '+',
            Self::Deleted => '-',
            Self::Modified => '~',
            Self::Unchanged => ' ',
        }
    }

    /// CSS class name used in markup output.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Modified => "modified",
            Self::Unchanged => "unchanged",
        }
    }
}

/// Position of a node inside its parent container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key}"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Container shape of a node whose children were compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Object,
    Array,
}

impl ContainerKind {
    /// Opening and closing brackets.
    pub fn brackets(&self) -> (&'static str, &'static str) {
        match self {
            Self::Object => ("{", "}"),
            Self::Array => ("[", "]"),
        }
    }
}

/// One node of the diff tree.
///
/// A node with a `container` was compared member by member and carries its
/// results in `children`. Any other node is a leaf holding the values on
/// either side (`old_value` for deletions, `new_value` for additions, both
/// for modified and unchanged leaves).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<PathSegment>,
    pub kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DiffNode>,
}

impl DiffNode {
    /// Create a leaf node.
    pub fn leaf(
        segment: Option<PathSegment>,
        kind: ChangeKind,
        old_value: Option<Value>,
        new_value: Option<Value>,
    ) -> Self {
        Self {
            segment,
            kind,
            container: None,
            old_value,
            new_value,
            children: Vec::new(),
        }
    }

    /// Create a container node. Its kind is derived from the children.
    pub fn container(
        segment: Option<PathSegment>,
        container: ContainerKind,
        children: Vec<DiffNode>,
    ) -> Self {
        let kind = if children.iter().all(|c| c.kind == ChangeKind::Unchanged) {
            ChangeKind::Unchanged
        } else {
            ChangeKind::Modified
        };
        Self {
            segment,
            kind,
            container: Some(container),
            old_value: None,
            new_value: None,
            children,
        }
    }

    pub fn is_container(&self) -> bool {
        self.container.is_some()
    }

    /// Descend along a path of child indices.
    pub fn get(&self, path: &[usize]) -> Option<&DiffNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }
}

/// Structured output of comparing two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    pub stats: DiffStats,
    pub tree: DiffNode,
}
