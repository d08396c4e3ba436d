//! Path-addressed reads and writes.
//!
//! Every function here is pure: the input tree is never modified, and a write
//! returns a new root. Only the containers between the root and the target
//! (the spine) are copied, and each copy is shallow, so every untouched
//! subtree is shared with the input.

use crate::value::NULL;
use crate::{JsonFormError, JsonFormResult, Map, Path, Seg, Value};
use std::sync::Arc;

/// Read the value at `path`.
///
/// Returns `None` when the walk reaches a primitive (including `null`) before
/// the path ends, when a member or element is missing, or when a key segment
/// that is not an integer is used on an array.
///
/// # Examples
///
/// ```
/// use jsonform_state::{get, path, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"items": [{"name": "a"}]}));
/// assert_eq!(get(&doc, &path!("items", 0, "name")), Some(&Value::from("a")));
/// assert_eq!(get(&doc, &path!("items", 3)), None);
/// assert_eq!(get(&doc, &path!()), Some(&doc));
/// ```
pub fn get<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = root;
    for seg in path {
        current = match current {
            Value::Array(items) => items.get(seg.array_index()?)?,
            Value::Object(map) => map.get(seg.object_key().as_ref())?,
            _ => return None,
        };
    }
    Some(current)
}

/// Return a copy of `root` with the value at `path` replaced by `value`.
///
/// - An empty path, a `null` root, or a primitive anywhere on the way yields
///   `value` at that point; missing intermediate containers are not created.
/// - Object members are overwritten in place or appended at the end.
/// - An array index equal to the length appends an element.
///
/// # Errors
///
/// [`JsonFormError::InvalidArrayIndex`] when a segment used on an array is not
/// a non-negative integer, or is greater than the array's length.
///
/// # Examples
///
/// ```
/// use jsonform_state::{set, path, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"server": {"port": 3000}, "name": "app"}));
/// let updated = set(&doc, &path!("server", "port"), Value::from(8080)).unwrap();
///
/// assert_eq!(updated, json!({"server": {"port": 8080}, "name": "app"}));
/// // Original is unchanged, and the untouched sibling is shared.
/// assert_eq!(doc["server"]["port"], Value::from(3000));
/// assert!(updated["name"].ptr_eq(&doc["name"]));
/// ```
pub fn set(root: &Value, path: &Path, value: Value) -> JsonFormResult<Value> {
    set_at_path(root, path.segments(), value, path)
}

fn set_at_path(
    current: &Value,
    segments: &[Seg],
    value: Value,
    full_path: &Path,
) -> JsonFormResult<Value> {
    let Some((seg, rest)) = segments.split_first() else {
        return Ok(value);
    };

    match current {
        Value::Array(items) => {
            let index = seg
                .array_index()
                .filter(|&i| i <= items.len())
                .ok_or_else(|| invalid_index(full_path, segments, seg))?;

            let child = if rest.is_empty() {
                value
            } else {
                let old = items.get(index).unwrap_or(&NULL);
                set_at_path(old, rest, value, full_path)?
            };

            let mut next = items.to_vec();
            if index == next.len() {
                next.push(child);
            } else {
                next[index] = child;
            }
            Ok(Value::Array(Arc::new(next)))
        }
        Value::Object(map) => {
            let key = seg.object_key();
            let child = if rest.is_empty() {
                value
            } else {
                let old = map.get(key.as_ref()).unwrap_or(&NULL);
                set_at_path(old, rest, value, full_path)?
            };

            let mut next = Map::clone(map);
            next.insert(key.into_owned(), child);
            Ok(Value::Object(Arc::new(next)))
        }
        // Nothing below a primitive can be addressed; the whole node goes.
        _ => Ok(value),
    }
}

/// Return a copy of `root` without the value at `path`.
///
/// Returns `Ok(None)` for the empty path: removing the root leaves nothing,
/// and what that means for the document is up to the caller.
///
/// Removing an array element shifts later elements down by one. A path that
/// does not exist returns `root` itself, so `ptr_eq` tells whether anything
/// was removed.
///
/// # Errors
///
/// [`JsonFormError::InvalidArrayIndex`] when a segment used on an array is not
/// a non-negative integer.
///
/// # Examples
///
/// ```
/// use jsonform_state::{remove, path, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": {"b": 1, "c": 2}}));
/// let updated = remove(&doc, &path!("a", "b")).unwrap().unwrap();
/// assert_eq!(updated, json!({"a": {"c": 2}}));
///
/// assert_eq!(remove(&doc, &path!()).unwrap(), None);
/// ```
pub fn remove(root: &Value, path: &Path) -> JsonFormResult<Option<Value>> {
    if path.is_empty() {
        return Ok(None);
    }
    remove_at_path(root, path.segments(), path).map(Some)
}

fn remove_at_path(current: &Value, segments: &[Seg], full_path: &Path) -> JsonFormResult<Value> {
    let Some((seg, rest)) = segments.split_first() else {
        return Ok(current.clone());
    };

    match current {
        Value::Array(items) => {
            let index = seg
                .array_index()
                .ok_or_else(|| invalid_index(full_path, segments, seg))?;
            let Some(child) = items.get(index) else {
                return Ok(current.clone());
            };

            let reduced = if rest.is_empty() {
                None
            } else {
                let reduced = remove_at_path(child, rest, full_path)?;
                if reduced.ptr_eq(child) {
                    return Ok(current.clone());
                }
                Some(reduced)
            };

            let mut next = items.to_vec();
            match reduced {
                Some(child) => next[index] = child,
                None => {
                    next.remove(index);
                }
            }
            Ok(Value::Array(Arc::new(next)))
        }
        Value::Object(map) => {
            let key = seg.object_key();
            let Some(child) = map.get(key.as_ref()) else {
                return Ok(current.clone());
            };

            let next = if rest.is_empty() {
                let mut next = Map::clone(map);
                next.shift_remove(key.as_ref());
                next
            } else {
                let reduced = remove_at_path(child, rest, full_path)?;
                if reduced.ptr_eq(child) {
                    return Ok(current.clone());
                }
                let mut next = Map::clone(map);
                next.insert(key.into_owned(), reduced);
                next
            };
            Ok(Value::Object(Arc::new(next)))
        }
        _ => Ok(current.clone()),
    }
}

/// Format a path for display: `root`, `server.port`, `items[0].name`.
///
/// Not guaranteed to parse back into the same path: keys containing `.` or
/// `[` are written verbatim.
#[inline]
pub fn path_to_string(path: &Path) -> String {
    path.to_string()
}

/// Error for `seg`, located at the array that `segments` starts below.
fn invalid_index(full_path: &Path, segments: &[Seg], seg: &Seg) -> JsonFormError {
    let depth = full_path.len() - segments.len();
    JsonFormError::invalid_array_index(full_path.slice(0, depth), seg.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    fn doc(v: serde_json::Value) -> Value {
        Value::from(v)
    }

    #[test]
    fn test_get_walks_mixed_containers() {
        let root = doc(json!({"items": [{"name": "a"}, {"name": "b"}]}));
        assert_eq!(
            get(&root, &path!("items", 1, "name")),
            Some(&Value::from("b"))
        );
        assert_eq!(get(&root, &path!("items", "1", "name")), Some(&Value::from("b")));
    }

    #[test]
    fn test_get_short_circuits_to_absent() {
        let root = doc(json!({"a": null, "b": 5, "c": [1], "d": {"0": "zero"}}));
        assert_eq!(get(&root, &path!("a", "x")), None);
        assert_eq!(get(&root, &path!("b", "x")), None);
        assert_eq!(get(&root, &path!("c", "x")), None);
        assert_eq!(get(&root, &path!("c", 9)), None);
        assert_eq!(get(&root, &path!("missing")), None);
        assert_eq!(get(&root, &path!("d", 0)), Some(&Value::from("zero")));
    }

    #[test]
    fn test_set_empty_path_replaces_root() {
        let root = doc(json!({"a": 1}));
        assert_eq!(set(&root, &path!(), Value::from(7)).unwrap(), json!(7));
    }

    #[test]
    fn test_set_on_null_root_returns_value() {
        let result = set(&Value::Null, &path!("a", "b"), Value::from(true)).unwrap();
        assert_eq!(result, json!(true));
    }

    #[test]
    fn test_set_below_primitive_replaces_it() {
        let root = doc(json!({"port": 3000}));
        let result = set(&root, &path!("port", "inner"), Value::from("x")).unwrap();
        assert_eq!(result, json!({"port": "x"}));
    }

    #[test]
    fn test_set_into_missing_member_does_not_build_containers() {
        let root = doc(json!({}));
        let result = set(&root, &path!("a", "b"), Value::from(1)).unwrap();
        assert_eq!(result, json!({"a": 1}));
    }

    #[test]
    fn test_set_appends_new_key_last() {
        let root = doc(json!({"z": 1, "a": 2}));
        let result = set(&root, &path!("m"), Value::from(3)).unwrap();
        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);

        let result = set(&root, &path!("z"), Value::from(9)).unwrap();
        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn test_set_at_length_appends() {
        let root = doc(json!([1]));
        let result = set(&root, &path!(1), Value::from(2)).unwrap();
        assert_eq!(result, json!([1, 2]));
    }

    #[test]
    fn test_set_past_end_rejected() {
        let root = doc(json!({"a": [1]}));
        for text in ["a[2]", "a[10000000000]", "a[18446744073709551615]"] {
            let path = Path::parse(text).unwrap();
            let err = set(&root, &path, Value::from(1)).unwrap_err();
            match err {
                JsonFormError::InvalidArrayIndex { path: at, .. } => assert_eq!(at, path!("a")),
                other => panic!("{text}: unexpected error: {other}"),
            }
        }
        let err = set(&root, &path!("a", 5, "b"), Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "invalid array index `[5]` at a");
    }

    #[test]
    fn test_set_numeric_key_on_array() {
        let root = doc(json!(["a", "b"]));
        let result = set(&root, &path!("1"), Value::from("B")).unwrap();
        assert_eq!(result, json!(["a", "B"]));
    }

    #[test]
    fn test_set_invalid_array_index_reports_array_path() {
        let root = doc(json!({"list": [1, 2]}));
        let err = set(&root, &path!("list", "first"), Value::Null).unwrap_err();
        match err {
            JsonFormError::InvalidArrayIndex { path, segment } => {
                assert_eq!(path, path!("list"));
                assert_eq!(segment, Seg::key("first"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_remove_array_element_shifts() {
        let root = doc(json!({"arr": [1, 2, 3]}));
        let result = remove(&root, &path!("arr", 0)).unwrap().unwrap();
        assert_eq!(result, json!({"arr": [2, 3]}));
        assert_eq!(get(&result, &path!("arr", 0)), Some(&Value::from(2)));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let root = doc(json!({"a": {"b": 1}, "arr": [1]}));
        for p in [
            path!("x"),
            path!("a", "x"),
            path!("a", "b", "c"),
            path!("arr", 5),
            path!("arr", 0, "x"),
        ] {
            let result = remove(&root, &p).unwrap().unwrap();
            assert!(result.ptr_eq(&root), "{p}");
        }
    }

    #[test]
    fn test_remove_invalid_array_index() {
        let root = doc(json!({"arr": [{"a": 1}]}));
        assert!(matches!(
            remove(&root, &path!("arr", "oops", "a")),
            Err(JsonFormError::InvalidArrayIndex { .. })
        ));
    }

    #[test]
    fn test_remove_keeps_key_order() {
        let root = doc(json!({"a": 1, "b": 2, "c": 3}));
        let result = remove(&root, &path!("b")).unwrap().unwrap();
        assert_eq!(result.to_json_string().unwrap(), r#"{"a":1,"c":3}"#);
    }

    #[test]
    fn test_path_to_string() {
        assert_eq!(path_to_string(&path!()), "root");
        assert_eq!(path_to_string(&path!("server", "port")), "server.port");
        assert_eq!(path_to_string(&path!("items", 0, "name")), "items[0].name");
    }
}
