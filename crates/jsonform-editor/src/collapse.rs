//! Collapsed/expanded state of container nodes.
//!
//! State is keyed by the structured [`Path`] of a node, not by its display
//! string, so `a.b` (two keys) and `"a.b"` (one key) never collide.

use jsonform_state::{Path, Seg};
use std::collections::BTreeSet;

/// The set of collapsed container paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: BTreeSet<Path>,
}

impl CollapseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the state of `path`; returns whether it is now collapsed.
    pub fn toggle(&mut self, path: &Path) -> bool {
        if self.collapsed.remove(path) {
            false
        } else {
            self.collapsed.insert(path.clone());
            true
        }
    }

    #[inline]
    pub fn is_collapsed(&self, path: &Path) -> bool {
        self.collapsed.contains(path)
    }

    pub fn collapse(&mut self, path: Path) {
        self.collapsed.insert(path);
    }

    pub fn expand(&mut self, path: &Path) {
        self.collapsed.remove(path);
    }

    pub fn clear(&mut self) {
        self.collapsed.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }

    /// Keep state in step with a deletion at `removed`.
    ///
    /// Entries inside the removed subtree are dropped. When an array element
    /// was removed, entries under later elements of the same array move down
    /// one index along with their elements.
    ///
    /// Array elements must be addressed by `Seg::Index`, the form the outline
    /// produces; the session rewrites paths into that form before calling.
    pub fn on_removed(&mut self, removed: &Path) {
        let Some(parent) = removed.parent() else {
            self.collapsed.clear();
            return;
        };
        let last = parent.len();
        let removed_index = match removed.last() {
            Some(Seg::Index(i)) => Some(*i),
            _ => None,
        };

        self.collapsed = std::mem::take(&mut self.collapsed)
            .into_iter()
            .filter(|p| !removed.is_prefix_of(p))
            .map(|mut p| {
                if let Some(removed_index) = removed_index {
                    if parent.is_prefix_of(&p) && p.len() > last {
                        if let Seg::Index(i) = &mut p.segments_mut()[last] {
                            if *i > removed_index {
                                *i -= 1;
                            }
                        }
                    }
                }
                p
            })
            .collect();
    }
}
