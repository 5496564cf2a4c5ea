//! Flattened tree rendering.

use super::markup;
use super::{LineBody, RenderConfig, RenderSurface, RenderedLine};
use crate::model::{ChangeKind, DiffNode, DiffResult};
use std::collections::HashMap;

/// Render surface that flattens the diff tree into indented lines.
///
/// The root container's brackets are omitted; its members start at depth 0.
/// Containers nested `expand_depth` levels or deeper start collapsed until
/// toggled.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderSurface {
    config: RenderConfig,
    result: Option<DiffResult>,
    /// Explicit expand/collapse overrides keyed by node path.
    folds: HashMap<Vec<usize>, bool>,
    lines: Vec<RenderedLine>,
}

impl TreeRenderSurface {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// The result currently on display.
    pub fn result(&self) -> Option<&DiffResult> {
        self.result.as_ref()
    }

    fn rebuild(&mut self) {
        self.lines.clear();
        let Some(result) = &self.result else {
            return;
        };

        let mut lines = Vec::new();
        let mut path = Vec::new();
        if result.tree.is_container() {
            self.flatten_children(&result.tree, 0, &mut path, &mut lines);
        } else {
            self.flatten(&result.tree, 0, &mut path, &mut lines);
        }
        self.lines = lines;
    }

    fn flatten_children(
        &self,
        node: &DiffNode,
        depth: usize,
        path: &mut Vec<usize>,
        lines: &mut Vec<RenderedLine>,
    ) {
        for (index, child) in node.children.iter().enumerate() {
            path.push(index);
            self.flatten(child, depth, path, lines);
            path.pop();
        }
    }

    fn flatten(
        &self,
        node: &DiffNode,
        depth: usize,
        path: &mut Vec<usize>,
        lines: &mut Vec<RenderedLine>,
    ) {
        if !self.config.show_unchanged && node.kind == ChangeKind::Unchanged {
            return;
        }

        let here = path.clone();
        let line = |body| RenderedLine {
            depth,
            kind: node.kind,
            segment: node.segment.clone(),
            body,
            path: here.clone(),
        };

        let Some(container) = node.container else {
            let body = match (&node.old_value, &node.new_value) {
                (Some(old), Some(new)) if node.kind == ChangeKind::Modified => LineBody::Change {
                    old: old.clone(),
                    new: new.clone(),
                },
                (_, Some(value)) | (Some(value), None) => LineBody::Value(value.clone()),
                (None, None) => LineBody::Value(serde_json::Value::Null),
            };
            lines.push(line(body));
            return;
        };

        let expanded = self
            .folds
            .get(path.as_slice())
            .copied()
            .unwrap_or(depth < self.config.expand_depth);
        let hidden = if expanded { 0 } else { node.children.len() };

        lines.push(line(LineBody::Open {
            container,
            expanded,
            hidden,
        }));
        if expanded {
            self.flatten_children(node, depth + 1, path, lines);
            lines.push(line(LineBody::Close(container)));
        }
    }
}

impl RenderSurface for TreeRenderSurface {
    fn render(&mut self, result: &DiffResult) {
        self.result = Some(result.clone());
        self.folds.clear();
        self.rebuild();
    }

    fn clear(&mut self) {
        self.result = None;
        self.folds.clear();
        self.lines.clear();
    }

    fn configure(&mut self, config: RenderConfig) {
        self.config = config;
        self.folds.clear();
        self.rebuild();
    }

    fn config(&self) -> RenderConfig {
        self.config
    }

    fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    fn markup(&self) -> Option<String> {
        let result = self.result.as_ref()?;
        Some(markup::render(&self.config, &result.stats, &self.lines))
    }

    fn toggle(&mut self, line: usize) -> bool {
        let Some(RenderedLine {
            body: LineBody::Open { expanded, .. },
            path,
            ..
        }) = self.lines.get(line)
        else {
            return false;
        };

        self.folds.insert(path.clone(), !*expanded);
        self.rebuild();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{DiffEngine, StructuralDiffEngine};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn diff(before: Value, after: Value) -> DiffResult {
        StructuralDiffEngine::new().diff(&before, &after).unwrap()
    }

    fn texts(surface: &TreeRenderSurface) -> Vec<String> {
        surface
            .lines()
            .iter()
            .map(|l| format!("{}{}", "  ".repeat(l.depth), l.text()))
            .collect()
    }

    #[test]
    fn test_render_flat_object() {
        let mut surface = TreeRenderSurface::new(RenderConfig::default());
        surface.render(&diff(
            json!({"name": "John", "age": 25}),
            json!({"name": "John", "age": 26, "email": "john@example.com"}),
        ));

        assert_eq!(
            texts(&surface),
            vec![
                "name: \"John\"",
                "age: 25 \u{2192} 26",
                "email: \"john@example.com\"",
            ]
        );
        assert_eq!(surface.lines()[2].kind, ChangeKind::Added);
    }

    #[test]
    fn test_render_replaces_previous_output() {
        let mut surface = TreeRenderSurface::new(RenderConfig::default());
        surface.render(&diff(json!({"a": 1, "b": 2}), json!({"a": 1, "b": 2})));
        assert_eq!(surface.lines().len(), 2);

        surface.render(&diff(json!({"a": 1}), json!({"a": 2})));
        assert_eq!(texts(&surface), vec!["a: 1 \u{2192} 2"]);
    }

    #[test]
    fn test_nested_containers_and_expand_depth() {
        let before = json!({"a": {"b": {"c": {"d": 1}}}});
        let after = json!({"a": {"b": {"c": {"d": 2}}}});
        let mut surface = TreeRenderSurface::new(RenderConfig {
            expand_depth: 2,
            ..Default::default()
        });
        surface.render(&diff(before, after));

        assert_eq!(
            texts(&surface),
            vec![
                "a: {",
                "  b: {",
                "    c: { \u{2026} } (1)",
                "  }",
                "}",
            ]
        );
    }

    #[test]
    fn test_toggle_expands_collapsed_node() {
        let before = json!({"a": {"b": 1}});
        let after = json!({"a": {"b": 2}});
        let mut surface = TreeRenderSurface::new(RenderConfig {
            expand_depth: 0,
            ..Default::default()
        });
        surface.render(&diff(before, after));
        assert_eq!(texts(&surface), vec!["a: { \u{2026} } (1)"]);

        assert!(surface.toggle(0));
        assert_eq!(texts(&surface), vec!["a: {", "  b: 1 \u{2192} 2", "}"]);

        assert!(!surface.toggle(1), "leaf lines are not foldable");
        assert!(!surface.toggle(42));

        assert!(surface.toggle(0));
        assert_eq!(surface.lines().len(), 1);
    }

    #[test]
    fn test_hide_unchanged() {
        let mut surface = TreeRenderSurface::new(RenderConfig {
            show_unchanged: false,
            ..Default::default()
        });
        surface.render(&diff(
            json!({"keep": 1, "nested": {"same": true}, "gone": 1}),
            json!({"keep": 1, "nested": {"same": true}}),
        ));
        assert_eq!(texts(&surface), vec!["gone: 1"]);
        assert_eq!(surface.lines()[0].kind, ChangeKind::Deleted);
    }

    #[test]
    fn test_scalar_root() {
        let mut surface = TreeRenderSurface::new(RenderConfig::default());
        surface.render(&diff(json!(1), json!("1")));
        assert_eq!(texts(&surface), vec!["1 \u{2192} \"1\""]);
    }

    #[test]
    fn test_clear_drops_markup() {
        let mut surface = TreeRenderSurface::new(RenderConfig::default());
        assert!(surface.markup().is_none());

        surface.render(&diff(json!({"a": 1}), json!({"a": 1})));
        assert!(surface.markup().is_some());

        surface.clear();
        assert!(surface.markup().is_none());
        assert!(surface.lines().is_empty());
    }

    #[test]
    fn test_configure_redraws() {
        let mut surface = TreeRenderSurface::new(RenderConfig::default());
        surface.render(&diff(json!({"a": 1, "b": 1}), json!({"a": 1, "b": 2})));
        assert_eq!(surface.lines().len(), 2);

        surface.configure(RenderConfig {
            show_unchanged: false,
            ..Default::default()
        });
        assert_eq!(texts(&surface), vec!["b: 1 \u{2192} 2"]);
    }
}
