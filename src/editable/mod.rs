//! Multi-cursor text editing core for text-input widgets.
//!
//! # Architecture
//!
//! The core components are:
//!
//! - [`RuneBuffer`]: character buffer with a derived line index
//! - [`TextCursor`]: a caret or selection with an orientation
//! - [`CursorList`]: sorted, non-overlapping cursor set kept normalized by
//!   interval merging
//! - [`TextEdit`]: positional length delta used to re-synchronize cursors
//! - [`CaretHistory`]: back/forward history of caret locations
//! - [`TextBoxController`]: owns all of the above and applies batch edits
//! - [`TextBoxMsg`]: message type for driving the controller from key input
//!
//! # Example
//!
//! ```
//! use textbox_core::editable::{TextBoxController, TextCursor};
//!
//! let mut controller = TextBoxController::from_text("one two");
//! controller.set_selections([TextCursor::caret(3), TextCursor::caret(7)]);
//! controller.insert_text("!");
//!
//! assert_eq!(controller.text(), "one! two!");
//! assert_eq!(controller.carets(), vec![4, 9]);
//! ```

mod buffer;
mod controller;
mod cursor;
mod cursor_list;
mod edit;
mod history;
mod messages;
mod navigation;

// Re-export main types
pub use buffer::RuneBuffer;
pub use controller::TextBoxController;
pub use cursor::TextCursor;
pub use cursor_list::{spans, CursorList};
pub use edit::{shift_span, splice, TextEdit};
pub use history::{CaretHistory, DEFAULT_HISTORY_LIMIT};
pub use messages::{IndexTransform, MoveTarget, TextBoxMsg};
