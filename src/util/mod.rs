//! Utility modules

pub mod text;

pub use text::{char_type, is_indent_whitespace, is_word_char, CharType, DEFAULT_TAB_WIDTH};
