//! Render surfaces turn a [`DiffResult`](crate::model::DiffResult) into a
//! visual representation.

mod line;
mod markup;
mod tree;

pub use line::{LineBody, RenderedLine};
pub use tree::TreeRenderSurface;

use crate::model::DiffResult;
use serde::{Deserialize, Serialize};

/// Colour scheme a surface renders with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTheme {
    #[default]
    Light,
    Dark,
}

impl RenderTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Construction-time configuration of a render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub theme: RenderTheme,
    /// Containers nested at least this deep start collapsed.
    pub expand_depth: usize,
    pub show_unchanged: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: RenderTheme::Light,
            expand_depth: 3,
            show_unchanged: true,
        }
    }
}

/// Stateful collaborator that owns the visual tree of the last rendered
/// result.
///
/// Every call to [`render`](RenderSurface::render) fully replaces the
/// previous output.
pub trait RenderSurface: Send + std::fmt::Debug {
    /// Produce visual output for `result`, discarding any previous output.
    fn render(&mut self, result: &DiffResult);

    /// Drop the current output.
    fn clear(&mut self);

    /// Replace the configuration and redraw the current output with it.
    fn configure(&mut self, config: RenderConfig);

    fn config(&self) -> RenderConfig;

    /// Currently visible lines, top to bottom.
    fn lines(&self) -> &[RenderedLine];

    /// Markup of the current output, `None` while nothing is rendered.
    fn markup(&self) -> Option<String>;

    /// Expand or collapse the container shown at `line`. Returns whether
    /// anything changed.
    fn toggle(&mut self, line: usize) -> bool;
}
