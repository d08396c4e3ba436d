//! Flattening a document into form rows.
//!
//! The outline is a depth-first list of [`FormNode`]s: one row per
//! container header and one per primitive field. Children of collapsed
//! containers are skipped.

use crate::collapse::CollapseState;
use jsonform_state::{Kind, Path, Value};
use serde::Serialize;
use std::fmt::Write as _;

/// Rendering options for an outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Label shown for the root row.
    pub root_label: String,
    /// Attach the display path to every row.
    pub show_paths: bool,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            root_label: "Configuration".to_string(),
            show_paths: true,
        }
    }
}

/// One row of the form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormNode {
    pub path: Path,
    pub label: String,
    pub kind: Kind,
    pub depth: usize,
    /// Human readable path, present when paths are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_path: Option<String>,
    pub detail: NodeDetail,
}

/// Kind-specific part of a row.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeDetail {
    /// An editable primitive.
    Field { value: Value },
    /// An object header.
    Object { members: usize, collapsed: bool },
    /// An array header.
    Array { items: usize, collapsed: bool },
}

/// Flatten `root` into form rows.
pub fn outline(root: &Value, collapse: &CollapseState, options: &OutlineOptions) -> Vec<FormNode> {
    let mut out = Vec::new();
    walk(
        root,
        Path::root(),
        options.root_label.clone(),
        0,
        collapse,
        options,
        &mut out,
    );
    out
}

fn walk(
    value: &Value,
    path: Path,
    label: String,
    depth: usize,
    collapse: &CollapseState,
    options: &OutlineOptions,
    out: &mut Vec<FormNode>,
) {
    let collapsed = collapse.is_collapsed(&path);
    let detail = match value {
        Value::Object(map) => NodeDetail::Object {
            members: map.len(),
            collapsed,
        },
        Value::Array(items) => NodeDetail::Array {
            items: items.len(),
            collapsed,
        },
        _ => NodeDetail::Field {
            value: value.clone(),
        },
    };
    out.push(FormNode {
        display_path: options.show_paths.then(|| path.to_string()),
        path: path.clone(),
        label,
        kind: value.kind(),
        depth,
        detail,
    });

    if collapsed {
        return;
    }
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter() {
                let child_path = path.with_segment(key.as_str());
                walk(child, child_path, key.clone(), depth + 1, collapse, options, out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                let label = format!("Item {}", i + 1);
                walk(child, path.with_segment(i), label, depth + 1, collapse, options, out);
            }
        }
        _ => {}
    }
}

/// Render rows as indented text, one line per row.
pub fn render_text(nodes: &[FormNode]) -> String {
    let mut text = String::new();
    for node in nodes {
        let indent = "  ".repeat(node.depth);
        // Writing to a String never fails.
        let _ = match &node.detail {
            NodeDetail::Field { value } => write!(text, "{indent}{}: {value}", node.label),
            NodeDetail::Object { members, collapsed } => write!(
                text,
                "{indent}{} {} ({members} fields)",
                marker(*collapsed),
                node.label
            ),
            NodeDetail::Array { items, collapsed } => write!(
                text,
                "{indent}{} {} ({items} items)",
                marker(*collapsed),
                node.label
            ),
        };
        if let Some(display_path) = &node.display_path {
            let _ = write!(text, "  [{display_path}]");
        }
        text.push('\n');
    }
    text
}

fn marker(collapsed: bool) -> &'static str {
    if collapsed {
        "▶"
    } else {
        "▼"
    }
}
