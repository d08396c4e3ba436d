//! Error types for editing sessions.

use jsonform_state::{JsonFormError, Kind, Path};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur while editing a document.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The session does not accept edits.
    #[error("document is read-only")]
    ReadOnly,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    /// An array operation targeted something else.
    #[error("expected an array at {path}, found {found}")]
    NotAnArray {
        /// The addressed path.
        path: Path,
        /// What is actually there (`null` when nothing is).
        found: Kind,
    },

    /// Deleting the root would leave no document.
    #[error("cannot delete the document root")]
    RootRemoved,

    /// The path engine rejected the edit.
    #[error(transparent)]
    Engine(#[from] JsonFormError),

    /// A file could not be read.
    #[error("failed to read {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON input.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl EditorError {
    /// Create a not-an-array error.
    #[inline]
    pub fn not_an_array(path: Path, found: Kind) -> Self {
        EditorError::NotAnArray { path, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonform_state::{path, Seg};

    #[test]
    fn test_error_display() {
        let err = EditorError::not_an_array(path!("server", "port"), Kind::Number);
        assert_eq!(err.to_string(), "expected an array at server.port, found number");
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let engine = JsonFormError::invalid_array_index(path!("items"), Seg::key("x"));
        let expected = engine.to_string();
        let err = EditorError::from(engine);
        assert_eq!(err.to_string(), expected);
    }
}
