//! Ordered set of non-overlapping cursors with bulk positional transforms.

use std::ops::Index;

use super::cursor::TextCursor;
use crate::interval::{self, Interval};

/// Sorted, non-overlapping list of cursors.
///
/// Every insertion goes through [`interval::merge`], so colliding cursors are
/// coalesced as they are added. The list itself may be empty; the controller
/// is responsible for always holding at least one cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorList {
    cursors: Vec<TextCursor>,
}

impl CursorList {
    pub fn new() -> Self {
        Self {
            cursors: Vec::new(),
        }
    }

    /// A list holding a single cursor
    pub fn single(cursor: TextCursor) -> Self {
        Self {
            cursors: vec![cursor],
        }
    }

    /// Build a list from arbitrary cursors, merging them in input order.
    pub fn from_cursors<I: IntoIterator<Item = TextCursor>>(cursors: I) -> Self {
        let mut list = Self::new();
        for cursor in cursors {
            list.merge(cursor);
        }
        list
    }

    /// Insert a cursor, coalescing it with any cursor it collides with.
    pub fn merge(&mut self, cursor: TextCursor) {
        interval::merge(&mut self.cursors, cursor);
    }

    /// Move the caret of every cursor whose caret index is at or after `from`
    /// to `transform(index)`, keeping the anchor fixed relative to the caret.
    ///
    /// Both ends are clamped to `0..=max`, so a selection pushed against a
    /// boundary shrinks.
    pub fn transform<F: Fn(usize) -> usize>(
        &self,
        from: usize,
        max: usize,
        transform: F,
    ) -> Self {
        let mut result = Self::new();
        for cursor in self.cursors.iter().copied() {
            if cursor.index >= from {
                let index = transform(cursor.index).min(max);
                let anchor = (index as isize + cursor.length).clamp(0, max as isize) as usize;
                result.merge(TextCursor::from_to(anchor, index));
            } else {
                result.merge(cursor);
            }
        }
        result
    }

    /// Move the caret of every cursor whose caret index is at or after `from`
    /// to `transform(index)`, keeping the anchor in place so the selection
    /// grows or shrinks. Both ends are clamped to `0..=max`.
    pub fn transform_range<F: Fn(usize) -> usize>(
        &self,
        from: usize,
        max: usize,
        transform: F,
    ) -> Self {
        let mut result = Self::new();
        for cursor in self.cursors.iter().copied() {
            if cursor.index >= from {
                let index = transform(cursor.index).min(max);
                let anchor = cursor.other_end().min(max);
                result.merge(TextCursor::from_to(anchor, index));
            } else {
                result.merge(cursor);
            }
        }
        result
    }

    /// Caret index of every cursor, in list order.
    pub fn carets(&self) -> Vec<usize> {
        self.cursors.iter().map(|c| c.index).collect()
    }

    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    pub fn first(&self) -> Option<&TextCursor> {
        self.cursors.first()
    }

    pub fn last(&self) -> Option<&TextCursor> {
        self.cursors.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextCursor> {
        self.cursors.iter()
    }

    pub fn as_slice(&self) -> &[TextCursor] {
        &self.cursors
    }

    /// Replace the cursor at `i` without re-merging.
    ///
    /// Used by batch edits, which re-merge every cursor afterwards.
    pub(crate) fn set(&mut self, i: usize, cursor: TextCursor) {
        self.cursors[i] = cursor;
    }

    /// Check the sorted/non-overlapping invariant (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        debug_assert!(
            interval::is_normalized(&self.cursors),
            "Cursors must be sorted and non-overlapping: {:?}",
            self.cursors
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

impl Index<usize> for CursorList {
    type Output = TextCursor;

    fn index(&self, i: usize) -> &TextCursor {
        &self.cursors[i]
    }
}

impl<'a> IntoIterator for &'a CursorList {
    type Item = &'a TextCursor;
    type IntoIter = std::slice::Iter<'a, TextCursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursors.iter()
    }
}

impl FromIterator<TextCursor> for CursorList {
    fn from_iter<I: IntoIterator<Item = TextCursor>>(iter: I) -> Self {
        Self::from_cursors(iter)
    }
}

impl From<CursorList> for Vec<TextCursor> {
    fn from(list: CursorList) -> Self {
        list.cursors
    }
}

/// Spans of every cursor, mostly useful in assertions.
pub fn spans(list: &CursorList) -> Vec<(usize, usize)> {
    list.iter().map(|c| c.span()).collect()
}
