//! Editor configuration.

use crate::error::{EditorError, EditorResult};
use crate::outline::OutlineOptions;
use serde::{Deserialize, Serialize};
use std::path::Path as FsPath;

/// Settings for an [`EditorSession`](crate::EditorSession).
///
/// Every field has a default, so a config file only needs the fields it
/// changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Reject all edits, undo and redo included.
    pub read_only: bool,
    /// Show the path of every row.
    pub show_paths: bool,
    /// Number of undo steps kept. Zero disables undo.
    pub history_limit: usize,
    /// Label of the root row.
    pub root_label: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            read_only: false,
            show_paths: true,
            history_limit: 100,
            root_label: "Configuration".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(text: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<FsPath>) -> EditorResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EditorError::Io {
            file: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn outline_options(&self) -> OutlineOptions {
        OutlineOptions {
            root_label: self.root_label.clone(),
            show_paths: self.show_paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = EditorConfig::from_json_str(r#"{"read_only": true}"#).unwrap();
        assert!(config.read_only);
        assert_eq!(config.history_limit, 100);
        assert_eq!(config.root_label, "Configuration");
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = EditorConfig::from_json_str("{nope").unwrap_err();
        assert!(matches!(err, EditorError::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"show_paths": false, "history_limit": 3}}"#).unwrap();
        let config = EditorConfig::from_file(file.path()).unwrap();
        assert!(!config.show_paths);
        assert_eq!(config.history_limit, 3);
        assert!(!config.outline_options().show_paths);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditorConfig::from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, EditorError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
