//! Immutable, path-addressed editing of JSON documents.
//!
//! `jsonform-state` is the model behind a form editor for arbitrary JSON: a
//! value type whose containers share their children, and a handful of pure
//! functions that read, write and delete at a path.
//!
//! # Core Concepts
//!
//! - **Value**: JSON sum type; cloning is O(1) and subtrees are shared
//! - **Path**: sequence of key/index segments; the empty path is the root
//! - **Kind**: the six JSON kinds, from [`classify`]
//! - **Engine**: [`get`], [`set`], [`remove`], [`path_to_string`]
//!
//! # Copy-on-write edits
//!
//! ```text
//! root' = set(root, path, value)
//! ```
//!
//! - `root` is never modified and stays valid after the call
//! - only the containers from the root down to `path` are rebuilt
//! - everything else in `root'` is the same allocation as in `root`
//!
//! # Quick Start
//!
//! ```
//! use jsonform_state::{get, path, set, Value};
//! use serde_json::json;
//!
//! let root = Value::from(json!({"a": [1, 2, 3], "b": {"c": true}}));
//! let next = set(&root, &path!("a", 1), Value::from(99)).unwrap();
//!
//! assert_eq!(next, json!({"a": [1, 99, 3], "b": {"c": true}}));
//! assert_eq!(get(&root, &path!("a", 1)), Some(&Value::from(2))); // Original unchanged
//! assert!(next["b"].ptr_eq(&root["b"])); // Sibling shared
//! ```

mod classify;
mod engine;
mod error;
mod path;
mod value;

pub use classify::{classify, is_complex, is_primitive, Kind};
pub use engine::{get, path_to_string, remove, set};
pub use error::{JsonFormError, JsonFormResult};
pub use path::{Path, Seg};
pub use value::{Map, Value};
