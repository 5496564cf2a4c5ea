use crate::model::{ChangeKind, ContainerKind, PathSegment};
use serde_json::Value;

/// What a rendered line shows after its label.
#[derive(Debug, Clone, PartialEq)]
pub enum LineBody {
    /// Opening bracket of a container. `hidden` counts children folded away.
    Open {
        container: ContainerKind,
        expanded: bool,
        hidden: usize,
    },
    Close(ContainerKind),
    /// Value present on one side, or unchanged on both.
    Value(Value),
    Change { old: Value, new: Value },
}

/// One line of flattened diff output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLine {
    pub depth: usize,
    pub kind: ChangeKind,
    pub segment: Option<PathSegment>,
    pub body: LineBody,
    /// Child indices leading from the tree root to the node.
    pub path: Vec<usize>,
}

impl RenderedLine {
    /// Whether the line can be expanded or collapsed.
    pub fn is_foldable(&self) -> bool {
        matches!(self.body, LineBody::Open { .. })
    }

    /// Label shown before the body (`key:` or `[index]:`).
    pub fn label(&self) -> Option<String> {
        match self.body {
            LineBody::Close(_) => None,
            _ => self.segment.as_ref().map(|s| format!("{s}:")),
        }
    }

    /// Plain text rendition without indentation or markers.
    pub fn text(&self) -> String {
        let body = match &self.body {
            LineBody::Open {
                container,
                expanded: true,
                ..
            } => container.brackets().0.to_string(),
            LineBody::Open {
                container, hidden, ..
            } => {
                let (open, close) = container.brackets();
                format!("{open} \u{2026} {close} ({hidden})")
            }
            LineBody::Close(container) => container.brackets().1.to_string(),
            LineBody::Value(value) => value.to_string(),
            LineBody::Change { old, new } => format!("{old} \u{2192} {new}"),
        };
        match self.label() {
            Some(label) => format!("{label} {body}"),
            None => body,
        }
    }
}
