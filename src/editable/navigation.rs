//! Index navigation primitives.
//!
//! Each function maps a gap index to a new gap index using only the current
//! buffer and line index. Inputs outside `0..=len` are clamped first.

use super::buffer::RuneBuffer;
use crate::util::{char_type, is_word_char};

impl RuneBuffer {
    pub fn index_first(&self, _index: usize) -> usize {
        0
    }

    pub fn index_last(&self, _index: usize) -> usize {
        self.len()
    }

    pub fn index_left(&self, index: usize) -> usize {
        self.clamp(index).saturating_sub(1)
    }

    pub fn index_right(&self, index: usize) -> usize {
        (self.clamp(index) + 1).min(self.len())
    }

    /// Start of the word-class run ending at `index`.
    pub fn index_word_left(&self, index: usize) -> usize {
        let text = self.chars();
        let mut i = self.clamp(index);
        if i == 0 {
            return 0;
        }
        i -= 1;
        let class = char_type(text[i]);
        while i > 0 {
            if char_type(text[i - 1]) != class {
                return i;
            }
            i -= 1;
        }
        0
    }

    /// End of the word-class run starting at `index`.
    pub fn index_word_right(&self, index: usize) -> usize {
        let text = self.chars();
        let mut i = self.clamp(index);
        if i < text.len() {
            let class = char_type(text[i]);
            while i + 1 < text.len() {
                i += 1;
                if char_type(text[i]) != class {
                    return i;
                }
            }
        }
        text.len()
    }

    /// Same column on the previous line, clamped to its length. Index 0 on
    /// the first line.
    pub fn index_up(&self, index: usize) -> usize {
        let (line, column) = self.line_and_column(index);
        if line > 0 {
            (self.line_start(line - 1) + column).min(self.line_end(line - 1))
        } else {
            0
        }
    }

    /// Same column on the next line, clamped to its length. End of the line
    /// on the last line.
    pub fn index_down(&self, index: usize) -> usize {
        let (line, column) = self.line_and_column(index);
        if line + 1 < self.line_count() {
            (self.line_start(line + 1) + column).min(self.line_end(line + 1))
        } else {
            self.line_end(line)
        }
    }

    /// Smart home: past the indentation goes to the indentation boundary,
    /// otherwise to column 0.
    pub fn index_home(&self, index: usize) -> usize {
        let (line, column) = self.line_and_column(index);
        let start = self.line_start(line);
        let indent = self.line_indent(line);
        if column > indent {
            start + indent
        } else {
            start
        }
    }

    pub fn index_end(&self, index: usize) -> usize {
        self.line_end(self.line_index(index))
    }

    /// Span of the word surrounding `index`. Empty when `index` is not
    /// adjacent to a word character.
    pub fn word_at(&self, index: usize) -> (usize, usize) {
        let text = self.chars();
        let index = self.clamp(index);
        let (mut start, mut end) = (index, index);
        while start > 0 && is_word_char(text[start - 1]) {
            start -= 1;
        }
        while end < text.len() && is_word_char(text[end]) {
            end += 1;
        }
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_right_clamp() {
        let buf = RuneBuffer::from_text("abc");
        assert_eq!(buf.index_left(0), 0);
        assert_eq!(buf.index_left(2), 1);
        assert_eq!(buf.index_right(2), 3);
        assert_eq!(buf.index_right(3), 3);
        assert_eq!(buf.index_right(10), 3);
    }

    #[test]
    fn test_first_last() {
        let buf = RuneBuffer::from_text("abc\ndef");
        assert_eq!(buf.index_first(5), 0);
        assert_eq!(buf.index_last(1), 7);
    }

    #[test]
    fn test_word_left() {
        let buf = RuneBuffer::from_text("hello world_2 .x");
        assert_eq!(buf.index_word_left(0), 0);
        assert_eq!(buf.index_word_left(3), 0);
        assert_eq!(buf.index_word_left(5), 0);
        assert_eq!(buf.index_word_left(6), 5); // over the space
        assert_eq!(buf.index_word_left(13), 6);
        assert_eq!(buf.index_word_left(16), 15);
        assert_eq!(buf.index_word_left(15), 13); // " ." is one boundary run
    }

    #[test]
    fn test_word_right() {
        let buf = RuneBuffer::from_text("hello world_2 .x");
        assert_eq!(buf.index_word_right(0), 5);
        assert_eq!(buf.index_word_right(2), 5);
        assert_eq!(buf.index_word_right(5), 6);
        assert_eq!(buf.index_word_right(6), 13);
        assert_eq!(buf.index_word_right(13), 15);
        assert_eq!(buf.index_word_right(15), 16);
        assert_eq!(buf.index_word_right(16), 16);
    }

    #[test]
    fn test_word_round_trip_stays_in_word() {
        let buf = RuneBuffer::from_text("alpha beta_gamma delta");
        let words = [(0, 5), (6, 16), (17, 22)];
        for (start, end) in words {
            for i in start + 1..end {
                let back = buf.index_word_left(i);
                assert_eq!(back, start, "word left from {}", i);
                assert!(buf.index_word_right(back) <= end, "word right from {}", back);
            }
        }
    }

    #[test]
    fn test_up_down_preserve_column() {
        let buf = RuneBuffer::from_text("abcdef\nab\nabcdef");
        // From column 4 on line 0 down to the short line clamps to its end.
        assert_eq!(buf.index_down(4), 9);
        // From column 2 on line 1 down keeps column 2.
        assert_eq!(buf.index_down(9), 12);
        assert_eq!(buf.index_up(14), 9);
        assert_eq!(buf.index_up(9), 2);
    }

    #[test]
    fn test_up_on_first_line_and_down_on_last() {
        let buf = RuneBuffer::from_text("abc\ndef");
        assert_eq!(buf.index_up(2), 0);
        assert_eq!(buf.index_down(5), 7);
    }

    #[test]
    fn test_home_toggles_indent() {
        let buf = RuneBuffer::from_text("x\n    body");
        // Caret after the indent goes to the indent boundary...
        assert_eq!(buf.index_home(9), 6);
        // ...and from the boundary (or inside the indent) to column 0.
        assert_eq!(buf.index_home(6), 2);
        assert_eq!(buf.index_home(4), 2);
        assert_eq!(buf.index_home(2), 2);
    }

    #[test]
    fn test_end() {
        let buf = RuneBuffer::from_text("abc\ndef");
        assert_eq!(buf.index_end(0), 3);
        assert_eq!(buf.index_end(3), 3);
        assert_eq!(buf.index_end(4), 7);
    }

    #[test]
    fn test_word_at() {
        let buf = RuneBuffer::from_text("foo bar_baz;");
        assert_eq!(buf.word_at(1), (0, 3));
        assert_eq!(buf.word_at(3), (0, 3));
        assert_eq!(buf.word_at(4), (4, 11));
        assert_eq!(buf.word_at(12), (12, 12));
    }
}
