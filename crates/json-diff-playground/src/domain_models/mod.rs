//! Domain models independent of rendering and of the action plumbing.

mod text_buffer;

pub use text_buffer::{caret_position, TextEdit};
