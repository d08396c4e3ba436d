//! Turning raw input text into values.
//!
//! Form inputs deliver text. The kind of the field being edited decides how
//! that text becomes a value; nothing here rejects input.

use jsonform_state::{Kind, Value};

/// Convert `raw` text typed into a field of the given kind.
///
/// - `Number`: the trimmed text as a finite number, or the text itself as a
///   string when it does not parse.
/// - `Boolean`: `true/false`, `on/off`, `1/0` (any case); other text is kept
///   as a string.
/// - `String`: the text verbatim.
/// - `Null`, `Array`, `Object`: the text as a JSON literal, falling back to a
///   string.
pub fn parse_field_input(kind: Kind, raw: &str) -> Value {
    match kind {
        Kind::String => Value::string(raw),
        Kind::Number => match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::string(raw),
        },
        Kind::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "1" => Value::Bool(true),
            "false" | "off" | "0" => Value::Bool(false),
            _ => Value::string(raw),
        },
        Kind::Null | Kind::Array | Kind::Object => {
            Value::from_json_str(raw).unwrap_or_else(|_| Value::string(raw))
        }
    }
}

/// Initial value for an item appended to `items`.
///
/// New items copy the kind of the first item with an empty value; an empty
/// array gets an empty object.
pub fn default_item_for(items: &[Value]) -> Value {
    let Some(first) = items.first() else {
        return Value::empty_object();
    };
    match first.kind() {
        Kind::String => Value::string(""),
        Kind::Number => Value::Number(0.0),
        Kind::Boolean => Value::Bool(false),
        Kind::Object => Value::empty_object(),
        Kind::Array => Value::empty_array(),
        Kind::Null => Value::Null,
    }
}
