//! Directed cursor type: a caret, or a selection with an active end.

use crate::interval::Interval;

/// A caret or a selection over the gap indices of a buffer.
///
/// `index` is the active end (where the caret is drawn and which end moves
/// under navigation). `length` is signed: the other end of the selection sits
/// at `index + length`. A length of zero is a plain caret.
///
/// Given the text `"Hello world"`:
///
/// ```text
///   H   e   l   l   o       w   o   r   l   d
/// 0   1   2   3   4   5   6   7   8   9   10  11
/// ```
///
/// - `TextCursor { index: 5, length: -5 }` selects `"Hello"` with the caret after `o`.
/// - `TextCursor { index: 6, length: 5 }` selects `"world"` with the caret before `w`.
/// - `TextCursor { index: 5, length: 0 }` is a caret between `o` and the space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextCursor {
    /// Caret index
    pub index: usize,
    /// Signed distance from the caret to the anchor
    pub length: isize,
}

impl TextCursor {
    pub const fn new(index: usize, length: isize) -> Self {
        Self { index, length }
    }

    /// A caret with no selection
    pub const fn caret(index: usize) -> Self {
        Self { index, length: 0 }
    }

    /// A selection anchored at `from` with the caret at `to`.
    pub fn from_to(from: usize, to: usize) -> Self {
        Self {
            index: to,
            length: from as isize - to as isize,
        }
    }

    /// The anchor end of the cursor
    pub fn other_end(&self) -> usize {
        (self.index as isize + self.length).max(0) as usize
    }

    /// Ordered `(start, end)` pair
    pub fn range(&self) -> (usize, usize) {
        let other = self.other_end();
        if self.index < other {
            (self.index, other)
        } else {
            (other, self.index)
        }
    }

    pub fn start(&self) -> usize {
        self.range().0
    }

    pub fn end(&self) -> usize {
        self.range().1
    }

    /// Same end-points, opposite orientation.
    pub fn invert(&self) -> Self {
        Self {
            index: self.other_end(),
            length: -self.length,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.length == 0
    }

    pub fn is_selection(&self) -> bool {
        self.length != 0
    }

    /// True if the caret is the lower end of a selection. Always false for a
    /// plain caret.
    pub fn caret_at_start(&self) -> bool {
        self.length > 0
    }

    /// Re-orient so that `caret_at_start` matches `at_start`. Carets are
    /// returned unchanged.
    pub fn oriented(self, at_start: bool) -> Self {
        if self.is_selection() && self.caret_at_start() != at_start {
            self.invert()
        } else {
            self
        }
    }

    /// Collapse to a caret at the start or end of the selection.
    pub fn collapsed(&self, to_start: bool) -> Self {
        let (start, end) = self.range();
        Self::caret(if to_start { start } else { end })
    }
}

impl Interval for TextCursor {
    fn span(&self) -> (usize, usize) {
        self.range()
    }

    /// The inserted cursor's orientation wins when it is a selection. A caret
    /// landing on selections keeps the orientation of the first selection it
    /// was merged into.
    fn coalesce(start: usize, end: usize, inserted: &Self, absorbed: &[Self]) -> Self {
        if start == end {
            return Self::caret(start);
        }
        let at_start = if inserted.is_selection() {
            inserted.caret_at_start()
        } else {
            absorbed
                .iter()
                .find(|c| c.is_selection())
                .map(|c| c.caret_at_start())
                .unwrap_or(false)
        };
        Self::from_to(end, start).oriented(at_start)
    }
}
