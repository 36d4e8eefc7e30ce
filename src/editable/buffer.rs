//! Rune buffer with a derived line index.
//!
//! The buffer is a flat `Vec<char>`; indices are gaps between characters, so
//! valid positions are `0..=len`. The line index is two parallel tables
//! (`line_starts`, `line_ends`) rebuilt by a single scan whenever the text is
//! replaced. The newline character belongs to no line: `line_ends[k]` is the
//! index of the newline (or of the buffer end for the last line).

use crate::util::is_indent_whitespace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuneBuffer {
    text: Vec<char>,
    line_starts: Vec<usize>,
    line_ends: Vec<usize>,
}

impl Default for RuneBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RuneBuffer {
    pub fn new() -> Self {
        Self {
            text: Vec::new(),
            line_starts: vec![0],
            line_ends: vec![0],
        }
    }

    /// Create a RuneBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(s);
        buffer
    }

    /// Replace the whole text and rebuild the line index
    pub fn set_text(&mut self, s: &str) {
        self.set_chars(s.chars().collect());
    }

    /// Replace the whole text and rebuild the line index
    pub fn set_chars(&mut self, text: Vec<char>) {
        self.text = text;
        self.rebuild_line_index();
    }

    fn rebuild_line_index(&mut self) {
        self.line_starts.clear();
        self.line_ends.clear();

        self.line_starts.push(0);
        for (i, &ch) in self.text.iter().enumerate() {
            if ch == '\n' {
                self.line_ends.push(i);
                self.line_starts.push(i + 1);
            }
        }
        self.line_ends.push(self.text.len());
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clamp an index into `0..=len`
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.text.len())
    }

    pub fn chars(&self) -> &[char] {
        &self.text
    }

    /// Character to the right of gap `index`, None at the buffer end
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.get(index).copied()
    }

    /// Full content as a String
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Text between two gap indices (clamped, order-insensitive)
    pub fn text_range(&self, start: usize, end: usize) -> String {
        let (start, end) = (self.clamp(start.min(end)), self.clamp(start.max(end)));
        self.text[start..end].iter().collect()
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Index of the first character of `line`
    ///
    /// Panics if `line >= line_count()`.
    pub fn line_start(&self, line: usize) -> usize {
        self.line_starts[line]
    }

    /// Index of the newline terminating `line`, or the buffer end
    ///
    /// Panics if `line >= line_count()`.
    pub fn line_end(&self, line: usize) -> usize {
        self.line_ends[line]
    }

    /// Characters of `line`, without the newline
    pub fn line_chars(&self, line: usize) -> &[char] {
        &self.text[self.line_start(line)..self.line_end(line)]
    }

    /// Line content (without trailing newline)
    pub fn line(&self, line: usize) -> String {
        self.line_chars(line).iter().collect()
    }

    /// Number of leading whitespace characters on `line`
    pub fn line_indent(&self, line: usize) -> usize {
        self.line_chars(line)
            .iter()
            .take_while(|&&c| is_indent_whitespace(c))
            .count()
    }

    /// Line containing `position`. A position sitting on a newline belongs to
    /// the line that newline terminates.
    pub fn line_index(&self, position: usize) -> usize {
        let position = self.clamp(position);
        self.line_ends
            .partition_point(|&end| end < position)
            .min(self.line_count() - 1)
    }

    /// Convert an absolute index to (line, column)
    pub fn line_and_column(&self, index: usize) -> (usize, usize) {
        let index = self.clamp(index);
        let line = self.line_index(index);
        (line, index - self.line_start(line))
    }

    /// Convert (line, column) to an absolute index, clamping both parts
    pub fn position_to_index(&self, line: usize, column: usize) -> usize {
        let line = line.min(self.line_count() - 1);
        (self.line_start(line) + column).min(self.line_end(line))
    }
}
