//! # json-diff-workspace
//!
//! The workflow behind a two-pane JSON comparison: two independently edited
//! inputs, a compare action that validates and diffs them, and derivative
//! actions (load an example, import a file, export the result).
//!
//! All state lives in [`WorkspaceController`], which applies one
//! [`WorkspaceAction`] at a time and reports [`WorkspaceEvent`]s. The diff
//! engine, render surface and file adapter are injected so the controller
//! can be driven with stand-ins.

pub mod action;
pub mod controller;
pub mod error;
pub mod event;
pub mod examples;
pub mod export;
pub mod file_io;
pub mod side;
pub mod state;
pub mod validator;

pub use action::{read_import, WorkspaceAction};
pub use controller::{Clock, WorkspaceController, WorkspaceSnapshot};
pub use error::{ErrorKind, WorkspaceError};
pub use event::WorkspaceEvent;
pub use examples::{Example, ExampleCatalog};
pub use export::{timestamped_filename, ExportFormat};
pub use file_io::{list_candidates, AcceptPattern, FileAdapter, FileError, FsFileAdapter, PickedFile};
pub use side::{InputSlot, Side};
pub use state::{Outcome, WorkspaceState};
pub use validator::{format_json, parse_document, validate, ValidationVerdict};
