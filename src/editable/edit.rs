//! Positional edit records used to re-synchronize state after a buffer change.

/// At position `at` of the pre-edit buffer, the buffer grew (`delta > 0`) or
/// shrank (`delta < 0`) by `|delta|` characters.
///
/// A single operation produces a batch of edits ordered from the highest
/// `at` to the lowest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextEdit {
    pub at: usize,
    pub delta: isize,
}

impl TextEdit {
    pub const fn new(at: usize, delta: isize) -> Self {
        Self { at, delta }
    }
}

/// Replace `text[start..end]` with `replacement` in place and describe the
/// change.
pub fn splice(text: &mut Vec<char>, start: usize, end: usize, replacement: &[char]) -> TextEdit {
    let delta = replacement.len() as isize - (end - start) as isize;
    text.splice(start..end, replacement.iter().copied());
    TextEdit::new(start, delta)
}

/// Shift the span `(start, end)` through a batch of edits and clamp it to
/// `0..=len`.
///
/// The start moves only for edits strictly before it; the end moves for
/// edits at or before it. A span turned inside out collapses onto its start.
pub fn shift_span(span: (usize, usize), edits: &[TextEdit], len: usize) -> (usize, usize) {
    let mut start = span.0 as isize;
    let mut end = span.1 as isize;
    for edit in edits {
        let at = edit.at as isize;
        if start > at {
            start += edit.delta;
        }
        if end >= at {
            end += edit.delta;
        }
    }
    if end < start {
        end = start;
    }
    let max = len as isize;
    (start.clamp(0, max) as usize, end.clamp(0, max) as usize)
}
