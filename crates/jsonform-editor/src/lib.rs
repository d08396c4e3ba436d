//! Editing layer for jsonform documents.
//!
//! `jsonform-state` provides the immutable value model and the path engine.
//! This crate builds the pieces a form editor needs on top of it:
//!
//! - [`EditorSession`]: the document being edited, with undo/redo, submit and reset
//! - [`Edit`]: a serializable set/delete record
//! - [`parse_field_input`]: raw input text to a value, by field kind
//! - [`outline`]: the document flattened into form rows
//! - [`CollapseState`]: which containers are folded
//! - [`EditorConfig`]: session settings, loadable from a JSON file

mod collapse;
mod config;
mod edit;
mod error;
mod input;
mod outline;
mod sample;
mod session;

pub use collapse::CollapseState;
pub use config::EditorConfig;
pub use edit::Edit;
pub use error::{EditorError, EditorResult};
pub use input::{default_item_for, parse_field_input};
pub use outline::{outline, render_text, FormNode, NodeDetail, OutlineOptions};
pub use sample::sample_config;
pub use session::EditorSession;
