//! Edit records.
//!
//! An edit is what one user action sends to the session: a new value for a
//! path, or a request to delete it.

use jsonform_state::{remove, set, JsonFormResult, Path, Value};
use serde::{Deserialize, Serialize};

/// A single edit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    /// Replace the value at the path.
    Set {
        /// Target path.
        path: Path,
        /// New value.
        value: Value,
    },

    /// Delete the value at the path.
    Delete {
        /// Target path.
        path: Path,
    },
}

impl Edit {
    /// Create a Set edit.
    #[inline]
    pub fn set(path: Path, value: impl Into<Value>) -> Self {
        Edit::Set {
            path,
            value: value.into(),
        }
    }

    /// Create a Delete edit.
    #[inline]
    pub fn delete(path: Path) -> Self {
        Edit::Delete { path }
    }

    /// Get the path this edit targets.
    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            Edit::Set { path, .. } => path,
            Edit::Delete { path } => path,
        }
    }

    /// Get the edit name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Edit::Set { .. } => "set",
            Edit::Delete { .. } => "delete",
        }
    }

    /// Apply to `root`, returning the new root.
    ///
    /// `None` means the root itself was deleted.
    pub fn apply_to(&self, root: &Value) -> JsonFormResult<Option<Value>> {
        match self {
            Edit::Set { path, value } => set(root, path, value.clone()).map(Some),
            Edit::Delete { path } => remove(root, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonform_state::path;
    use serde_json::json;

    #[test]
    fn test_edit_constructors() {
        let edit = Edit::set(path!("a"), 1);
        assert_eq!(edit.name(), "set");
        assert_eq!(edit.path(), &path!("a"));

        let edit = Edit::delete(path!("b"));
        assert_eq!(edit.name(), "delete");
    }

    #[test]
    fn test_edit_wire_format() {
        let edit = Edit::set(path!("items", 0, "name"), "Alice");
        let text = serde_json::to_string(&edit).unwrap();
        assert_eq!(text, r#"{"op":"set","path":["items",0,"name"],"value":"Alice"}"#);

        let parsed: Edit = serde_json::from_str(r#"{"op":"delete","path":["server"]}"#).unwrap();
        assert_eq!(parsed, Edit::delete(path!("server")));
    }

    #[test]
    fn test_apply_to() {
        let root = Value::from(json!({"a": 1, "b": 2}));
        let next = Edit::set(path!("a"), 10).apply_to(&root).unwrap().unwrap();
        assert_eq!(next, json!({"a": 10, "b": 2}));

        let next = Edit::delete(path!("b")).apply_to(&next).unwrap().unwrap();
        assert_eq!(next, json!({"a": 10}));

        assert_eq!(Edit::delete(path!()).apply_to(&root).unwrap(), None);
    }
}
