//! Character classification used by word navigation and indentation

/// Character type for word navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Letters, numbers and the underscore
    WordChar,
    /// Everything else (whitespace, punctuation, symbols)
    Boundary,
}

/// Get the character type for word navigation
pub fn char_type(ch: char) -> CharType {
    if is_word_char(ch) {
        CharType::WordChar
    } else {
        CharType::Boundary
    }
}

/// A character is part of a word iff it is a letter, a number or `_`.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_numeric() || ch == '_'
}

/// Whitespace that counts towards a line's indentation.
///
/// The newline itself never belongs to a line, so it is excluded.
pub fn is_indent_whitespace(ch: char) -> bool {
    ch != '\n' && ch.is_whitespace()
}

/// Tab width used when no configuration is supplied
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// A run of `width` spaces, used for indentation
pub fn spaces(width: usize) -> Vec<char> {
    vec![' '; width]
}
