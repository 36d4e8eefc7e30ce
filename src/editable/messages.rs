//! Message types for driving a controller from a host's input layer.

use super::buffer::RuneBuffer;

/// Target for caret movement and selection growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    /// Start of the buffer
    First,
    /// End of the buffer
    Last,
    /// One character left
    Left,
    /// One character right
    Right,
    /// Same column on the previous line
    Up,
    /// Same column on the next line
    Down,
    /// Smart line start (indentation boundary, then column 0)
    Home,
    /// End of line
    End,
    /// Start of the previous word-class run
    WordLeft,
    /// End of the next word-class run
    WordRight,
}

/// Index transform used to move a caret
pub type IndexTransform = fn(&RuneBuffer, usize) -> usize;

impl MoveTarget {
    /// The navigation primitive behind this target
    pub fn transform(self) -> IndexTransform {
        match self {
            MoveTarget::First => RuneBuffer::index_first,
            MoveTarget::Last => RuneBuffer::index_last,
            MoveTarget::Left => RuneBuffer::index_left,
            MoveTarget::Right => RuneBuffer::index_right,
            MoveTarget::Up => RuneBuffer::index_up,
            MoveTarget::Down => RuneBuffer::index_down,
            MoveTarget::Home => RuneBuffer::index_home,
            MoveTarget::End => RuneBuffer::index_end,
            MoveTarget::WordLeft => RuneBuffer::index_word_left,
            MoveTarget::WordRight => RuneBuffer::index_word_right,
        }
    }
}

/// Unified message type for controller operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextBoxMsg {
    // === Navigation ===
    /// Move every caret, dropping selections' extent
    Move(MoveTarget),
    /// Move every caret, keeping the anchor in place
    Select(MoveTarget),
    /// Add a caret on the line above each caret
    AddCaretsUp,
    /// Add a caret on the line below each caret
    AddCaretsDown,
    /// Select the whole buffer
    SelectAll,
    /// Collapse selections to their end (false) or start (true)
    Deselect { to_start: bool },

    // === Editing ===
    /// Replace every selection with text, leaving carets after it
    Insert(String),
    /// Enter key
    Newline,
    /// Delete key
    Delete,
    /// Backspace key
    Backspace,
    /// Indent lines spanned by the selections
    Indent,
    /// Unindent lines spanned by the selections
    Unindent,

    // === Caret history ===
    RestorePrevious,
    RestoreNext,
}

impl TextBoxMsg {
    /// Check if this message modifies the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            TextBoxMsg::Insert(_)
                | TextBoxMsg::Newline
                | TextBoxMsg::Delete
                | TextBoxMsg::Backspace
                | TextBoxMsg::Indent
                | TextBoxMsg::Unindent
        )
    }
}
