//! Ratatui widgets for diff output.

mod diff_tree;
mod stats_line;

pub use diff_tree::DiffTreeWidget;
pub use stats_line::stats_line;
