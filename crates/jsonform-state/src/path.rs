//! Paths addressing a location inside a JSON value.
//!
//! A path is a sequence of segments. Each segment is either an object key or
//! an array index. The empty path addresses the root.

use crate::error::{JsonFormError, JsonFormResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A single segment in a path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    /// Object member: `{"key": value}`
    Key(String),
    /// Array element: `[index]`
    Index(usize),
}

impl Seg {
    /// Create a key segment.
    #[inline]
    pub fn key(k: impl Into<String>) -> Self {
        Seg::Key(k.into())
    }

    /// Create an index segment.
    #[inline]
    pub fn index(i: usize) -> Self {
        Seg::Index(i)
    }

    #[inline]
    pub fn is_key(&self) -> bool {
        matches!(self, Seg::Key(_))
    }

    /// Position this segment addresses inside an array.
    ///
    /// Index segments are used as-is. Key segments qualify only when the
    /// whole key is ASCII digits that fit a `usize`.
    #[inline]
    pub fn array_index(&self) -> Option<usize> {
        match self {
            Seg::Index(i) => Some(*i),
            Seg::Key(k) if !k.is_empty() && k.bytes().all(|b| b.is_ascii_digit()) => {
                k.parse().ok()
            }
            Seg::Key(_) => None,
        }
    }

    /// Member name this segment addresses inside an object.
    ///
    /// Index segments address the member named by their decimal form.
    #[inline]
    pub fn object_key(&self) -> Cow<'_, str> {
        match self {
            Seg::Key(k) => Cow::Borrowed(k),
            Seg::Index(i) => Cow::Owned(i.to_string()),
        }
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(k) => f.write_str(k),
            Seg::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<String> for Seg {
    fn from(s: String) -> Self {
        Seg::Key(s)
    }
}

impl From<&str> for Seg {
    fn from(s: &str) -> Self {
        Seg::Key(s.to_owned())
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// A complete path into a JSON value.
///
/// Renderers build a child's path by appending one segment to the parent's
/// with [`Path::with_segment`]; paths are never shared or edited in place.
///
/// # Examples
///
/// ```
/// use jsonform_state::Path;
///
/// let path = Path::root().key("items").index(0).key("name");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "items[0].name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path(Vec<Seg>);

impl Path {
    /// The empty path (the root).
    #[inline]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Append a key segment and return self (builder pattern).
    #[inline]
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(Seg::Key(k.into()));
        self
    }

    /// Append an index segment and return self (builder pattern).
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Seg::Index(i));
        self
    }

    #[inline]
    pub fn push(&mut self, seg: Seg) {
        self.0.push(seg);
    }

    #[inline]
    pub fn push_key(&mut self, k: impl Into<String>) {
        self.0.push(Seg::Key(k.into()));
    }

    #[inline]
    pub fn push_index(&mut self, i: usize) {
        self.0.push(Seg::Index(i));
    }

    #[inline]
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    #[inline]
    pub fn segments_mut(&mut self) -> &mut Vec<Seg> {
        &mut self.0
    }

    /// True for the root path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn first(&self) -> Option<&Seg> {
        self.0.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Seg> {
        self.0.last()
    }

    /// Append a segment and return a new path (non-mutating builder).
    #[inline]
    pub fn with_segment(&self, seg: impl Into<Seg>) -> Path {
        let mut result = self.clone();
        result.0.push(seg.into());
        result
    }

    /// Check if this path is a prefix of another path.
    ///
    /// A path is a prefix of itself.
    ///
    /// ```
    /// use jsonform_state::path;
    ///
    /// let parent = path!("server");
    /// let child = path!("server", "port");
    ///
    /// assert!(parent.is_prefix_of(&child));
    /// assert!(!child.is_prefix_of(&parent));
    /// assert!(parent.is_prefix_of(&parent));
    /// ```
    #[inline]
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        other.0.starts_with(&self.0)
    }

    /// The path without its last segment; `None` at the root.
    pub fn parent(&self) -> Option<Path> {
        if self.0.is_empty() {
            None
        } else {
            Some(Path(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Segments `start..end` as a new path.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> Path {
        Path(self.0[start..end].to_vec())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Seg> {
        self.0.iter()
    }

    /// Parse the display form produced by [`fmt::Display`].
    ///
    /// Accepts `root` (or an empty string) for the root, dot-separated keys
    /// and bracketed indices: `items[0].name`, `[2].id`, `matrix[1][0]`.
    /// Keys containing `.` or `[` cannot be expressed in this form.
    ///
    /// ```
    /// use jsonform_state::{path, Path};
    ///
    /// assert_eq!(Path::parse("items[0].name").unwrap(), path!("items", 0, "name"));
    /// assert_eq!(Path::parse("root").unwrap(), Path::root());
    /// ```
    pub fn parse(input: &str) -> JsonFormResult<Path> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == "root" {
            return Ok(Path::root());
        }

        let err = |message: &str| JsonFormError::path_syntax(input, message);
        let mut path = Path::root();
        let mut rest = trimmed;
        let mut leading = true;

        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('[') {
                let close = after.find(']').ok_or_else(|| err("unclosed `[`"))?;
                let index = after[..close]
                    .parse::<usize>()
                    .map_err(|_| err("index must be a non-negative integer"))?;
                path.push_index(index);
                rest = &after[close + 1..];
            } else {
                let body = if leading {
                    rest
                } else {
                    rest.strip_prefix('.')
                        .ok_or_else(|| err("expected `.` or `[` between segments"))?
                };
                let end = body.find(|c| c == '.' || c == '[').unwrap_or(body.len());
                if end == 0 {
                    return Err(err("empty key"));
                }
                path.push_key(&body[..end]);
                rest = &body[end..];
            }
            leading = false;
        }

        Ok(path)
    }
}

/// `root` for the empty path; otherwise keys joined with `.` and indices
/// as `[N]`, e.g. `items[0].name`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        for (i, seg) in self.0.iter().enumerate() {
            if i > 0 && seg.is_key() {
                f.write_str(".")?;
            }
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

impl FromIterator<Seg> for Path {
    fn from_iter<I: IntoIterator<Item = Seg>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Seg;
    type IntoIter = std::vec::IntoIter<Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Seg;
    type IntoIter = std::slice::Iter<'a, Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Seg;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Construct a `Path` from a sequence of segments.
///
/// # Examples
///
/// ```
/// use jsonform_state::path;
///
/// // String literals become Key segments
/// let p = path!("server", "ssl", "enabled");
///
/// // Numbers become Index segments
/// let p = path!("integrations", 0, "name");
/// assert_eq!(p.to_string(), "integrations[0].name");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($crate::path!(@seg $seg));
        )+
        p
    }};
    (@seg $seg:expr) => {
        $crate::Seg::from($seg)
    };
}
