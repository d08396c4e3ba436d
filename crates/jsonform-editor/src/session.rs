//! EditorSession owns the document being edited.
//!
//! Every edit produces a new root through the path engine; the previous root
//! goes onto a bounded undo stack. Because roots share unchanged subtrees,
//! keeping history costs only the containers each edit copied.
//!
//! # Example
//!
//! ```
//! use jsonform_editor::EditorSession;
//! use jsonform_state::{path, Value};
//! use serde_json::json;
//!
//! let mut session = EditorSession::new(Value::from(json!({"port": 3000})));
//! session.set_field_input(&path!("port"), "8080").unwrap();
//! assert_eq!(session.root()["port"], json!(8080));
//!
//! session.undo().unwrap();
//! assert_eq!(session.root()["port"], json!(3000));
//! ```

use crate::collapse::CollapseState;
use crate::config::EditorConfig;
use crate::edit::Edit;
use crate::error::{EditorError, EditorResult};
use crate::input::{default_item_for, parse_field_input};
use crate::outline::{outline, render_text, FormNode};
use jsonform_state::{get, remove, set, Kind, Path, Value};
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// An editable document with undo/redo history.
#[derive(Clone, Debug)]
pub struct EditorSession {
    config: EditorConfig,
    initial: Value,
    current: Value,
    undo: VecDeque<Value>,
    redo: Vec<Value>,
    submitted: Option<Value>,
    collapse: CollapseState,
}

impl EditorSession {
    /// Create a session with the default configuration.
    pub fn new(initial: Value) -> Self {
        Self::with_config(initial, EditorConfig::default())
    }

    pub fn with_config(initial: Value, config: EditorConfig) -> Self {
        Self {
            config,
            current: initial.clone(),
            initial,
            undo: VecDeque::new(),
            redo: Vec::new(),
            submitted: None,
            collapse: CollapseState::new(),
        }
    }

    /// The current root.
    #[inline]
    pub fn root(&self) -> &Value {
        &self.current
    }

    /// The root the session started from.
    #[inline]
    pub fn initial(&self) -> &Value {
        &self.initial
    }

    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Read the value at `path` in the current root.
    pub fn get(&self, path: &Path) -> Option<&Value> {
        get(&self.current, path)
    }

    /// Replace the value at `path`.
    pub fn set(&mut self, path: &Path, value: Value) -> EditorResult<()> {
        self.ensure_writable()?;
        let next = set(&self.current, path, value)?;
        self.commit(next);
        debug!(path = %path, "field updated");
        Ok(())
    }

    /// Delete the value at `path`. The root cannot be deleted.
    ///
    /// Deleting a path that does not exist changes nothing, history included.
    pub fn delete(&mut self, path: &Path) -> EditorResult<()> {
        self.ensure_writable()?;
        if path.is_empty() {
            return Err(EditorError::RootRemoved);
        }
        let next = remove(&self.current, path)?.ok_or(EditorError::RootRemoved)?;
        if next.ptr_eq(&self.current) {
            debug!(path = %path, "nothing to delete");
            return Ok(());
        }
        let removed = self.canonical_path(path);
        self.commit(next);
        self.collapse.on_removed(&removed);
        debug!(path = %path, "field deleted");
        Ok(())
    }

    pub fn apply(&mut self, edit: &Edit) -> EditorResult<()> {
        match edit {
            Edit::Set { path, value } => self.set(path, value.clone()),
            Edit::Delete { path } => self.delete(path),
        }
    }

    /// Apply edits in order, each as its own undo step.
    ///
    /// Stops at the first failing edit; edits before it stay applied.
    /// Returns the number of edits applied.
    pub fn apply_all<'a>(
        &mut self,
        edits: impl IntoIterator<Item = &'a Edit>,
    ) -> EditorResult<usize> {
        let mut applied = 0;
        for edit in edits {
            if let Err(err) = self.apply(edit) {
                warn!(
                    error = %err,
                    op = edit.name(),
                    path = %edit.path(),
                    applied,
                    "edit rejected"
                );
                return Err(err);
            }
            applied += 1;
        }
        Ok(applied)
    }

    /// Set a field from raw input text, interpreted by the field's current kind.
    ///
    /// A field that does not exist yet is treated as a string field.
    pub fn set_field_input(&mut self, path: &Path, raw: &str) -> EditorResult<()> {
        let kind = self.get(path).map(Value::kind).unwrap_or(Kind::String);
        self.set(path, parse_field_input(kind, raw))
    }

    /// Append a default item to the array at `path`; returns its index.
    pub fn add_item(&mut self, path: &Path) -> EditorResult<usize> {
        let items = self.array_at(path)?;
        let index = items.len();
        let item = default_item_for(items);
        self.set(&path.with_segment(index), item)?;
        Ok(index)
    }

    /// Remove item `index` from the array at `path`.
    pub fn remove_item(&mut self, path: &Path, index: usize) -> EditorResult<()> {
        self.array_at(path)?;
        self.delete(&path.with_segment(index))
    }

    pub fn undo(&mut self) -> EditorResult<()> {
        self.ensure_writable()?;
        let previous = self.undo.pop_back().ok_or(EditorError::NothingToUndo)?;
        self.redo.push(std::mem::replace(&mut self.current, previous));
        self.submitted = None;
        debug!(remaining = self.undo.len(), "undo");
        Ok(())
    }

    pub fn redo(&mut self) -> EditorResult<()> {
        self.ensure_writable()?;
        let next = self.redo.pop().ok_or(EditorError::NothingToRedo)?;
        let previous = std::mem::replace(&mut self.current, next);
        self.push_undo(previous);
        self.submitted = None;
        debug!(remaining = self.redo.len(), "redo");
        Ok(())
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo steps available.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo.len()
    }

    /// Discard every edit and return to the initial root.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.undo.clear();
        self.redo.clear();
        self.submitted = None;
        self.collapse.clear();
        info!("session reset");
    }

    /// Snapshot the current root and return it as pretty-printed JSON.
    pub fn submit(&mut self) -> EditorResult<String> {
        let text = self.current.to_json_pretty()?;
        self.submitted = Some(self.current.clone());
        info!(bytes = text.len(), "configuration submitted");
        Ok(text)
    }

    /// The last submitted root, until the next edit.
    #[inline]
    pub fn submitted(&self) -> Option<&Value> {
        self.submitted.as_ref()
    }

    #[inline]
    pub fn read_only(&self) -> bool {
        self.config.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.config.read_only = read_only;
    }

    pub fn set_show_paths(&mut self, show_paths: bool) {
        self.config.show_paths = show_paths;
    }

    /// Flip the collapsed state of the container at `path`.
    pub fn toggle_collapse(&mut self, path: &Path) -> bool {
        let path = self.canonical_path(path);
        self.collapse.toggle(&path)
    }

    #[inline]
    pub fn collapse_state(&self) -> &CollapseState {
        &self.collapse
    }

    /// The current root as form rows.
    pub fn outline(&self) -> Vec<FormNode> {
        outline(&self.current, &self.collapse, &self.config.outline_options())
    }

    /// The current root as indented text.
    pub fn render(&self) -> String {
        render_text(&self.outline())
    }

    fn ensure_writable(&self) -> EditorResult<()> {
        if self.config.read_only {
            return Err(EditorError::ReadOnly);
        }
        Ok(())
    }

    fn array_at(&self, path: &Path) -> EditorResult<&[Value]> {
        match self.get(path) {
            Some(value) => value
                .as_array()
                .ok_or_else(|| EditorError::not_an_array(path.clone(), value.kind())),
            None => Err(EditorError::not_an_array(path.clone(), Kind::Null)),
        }
    }

    /// `path` with every segment that lands on an array turned into an index,
    /// matching the paths the outline produces.
    fn canonical_path(&self, path: &Path) -> Path {
        let mut node = Some(&self.current);
        let mut out = Path::root();
        for seg in path {
            node = match (node, seg.array_index()) {
                (Some(Value::Array(items)), Some(i)) => {
                    out.push_index(i);
                    items.get(i)
                }
                (Some(Value::Object(map)), _) => {
                    out.push(seg.clone());
                    map.get(seg.object_key().as_ref())
                }
                _ => {
                    out.push(seg.clone());
                    None
                }
            };
        }
        out
    }

    fn commit(&mut self, next: Value) {
        let previous = std::mem::replace(&mut self.current, next);
        self.push_undo(previous);
        self.redo.clear();
        self.submitted = None;
    }

    fn push_undo(&mut self, previous: Value) {
        if self.config.history_limit == 0 {
            return;
        }
        self.undo.push_back(previous);
        while self.undo.len() > self.config.history_limit {
            self.undo.pop_front();
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(crate::sample::sample_config())
    }
}
