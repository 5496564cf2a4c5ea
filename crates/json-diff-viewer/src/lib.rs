//! # json-diff-viewer
//!
//! Structural diffing of JSON documents and rendering of the result, for use
//! in terminal applications.
//!
//! ## Design Principles
//!
//! The crate is split along two narrow seams so that orchestration code can
//! be tested with stand-ins:
//!
//! - [`DiffEngine`]: pure function from two parsed documents to a
//!   [`DiffResult`] (change tree plus aggregate counts).
//! - [`RenderSurface`]: stateful object owning the visual output of the last
//!   rendered result, replaced wholesale on every render.
//!
//! ## Usage
//!
//! ```rust
//! use json_diff_viewer::{DiffEngine, RenderConfig, RenderSurface, StructuralDiffEngine, TreeRenderSurface};
//! use serde_json::json;
//!
//! let result = StructuralDiffEngine::new()
//!     .diff(&json!({"a": 1}), &json!({"a": 2}))
//!     .unwrap();
//! assert_eq!(result.stats.modified, 1);
//!
//! let mut surface = TreeRenderSurface::new(RenderConfig::default());
//! surface.render(&result);
//! assert_eq!(surface.lines().len(), 1);
//! ```

pub mod engine;
pub mod model;
pub mod render;
pub mod traits;
pub mod widget;

pub use engine::{DiffEngine, DiffError, StructuralDiffEngine};
pub use model::{ChangeKind, ContainerKind, DiffNode, DiffResult, DiffStats, PathSegment};
pub use render::{
    LineBody, RenderConfig, RenderSurface, RenderTheme, RenderedLine, TreeRenderSurface,
};
pub use traits::{DefaultTheme, ThemeProvider};
pub use widget::{stats_line, DiffTreeWidget};
