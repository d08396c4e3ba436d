//! Error types for jsonform-state operations.

use crate::{Path, Seg};
use thiserror::Error;

/// Result type alias for jsonform-state operations.
pub type JsonFormResult<T> = Result<T, JsonFormError>;

/// Errors that can occur during jsonform-state operations.
///
/// Missing members, out-of-range reads and writes below a primitive are not
/// errors; they resolve to an absent value or a full replacement.
#[derive(Debug, Error)]
pub enum JsonFormError {
    /// A segment addressing an array is not a non-negative integer.
    #[error("invalid array index `{segment}` at {path}")]
    InvalidArrayIndex {
        /// Path of the array being indexed.
        path: Path,
        /// The offending segment.
        segment: Seg,
    },

    /// Text could not be parsed as a path.
    #[error("invalid path `{input}`: {message}")]
    PathSyntax {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        message: String,
    },

    /// JSON text could not be read or written.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl JsonFormError {
    /// Create an invalid array index error.
    #[inline]
    pub fn invalid_array_index(path: Path, segment: Seg) -> Self {
        JsonFormError::InvalidArrayIndex { path, segment }
    }

    /// Create a path syntax error.
    #[inline]
    pub fn path_syntax(input: impl Into<String>, message: impl Into<String>) -> Self {
        JsonFormError::PathSyntax {
            input: input.into(),
            message: message.into(),
        }
    }
}
