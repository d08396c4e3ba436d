//! Value kinds.
//!
//! Classification is a tag match on [`Value`]; the renderer uses it to decide
//! whether to recurse into a node or draw an input for it.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six JSON kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Lowercase name, as used in messages and serialized output.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// `null`, booleans, numbers and strings.
    #[inline]
    pub fn is_primitive(self) -> bool {
        !self.is_complex()
    }

    /// Arrays and objects.
    #[inline]
    pub fn is_complex(self) -> bool {
        matches!(self, Kind::Array | Kind::Object)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of a value.
#[inline]
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Boolean,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
    }
}

/// True for values that have no children.
#[inline]
pub fn is_primitive(value: &Value) -> bool {
    classify(value).is_primitive()
}

/// True for arrays and objects.
#[inline]
pub fn is_complex(value: &Value) -> bool {
    classify(value).is_complex()
}
