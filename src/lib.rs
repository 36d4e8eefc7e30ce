//! Textbox Core - editing engine for multi-cursor text inputs
//!
//! This crate provides the buffer, cursor and edit-batch logic behind a
//! text-box widget. Rendering, input handling and clipboard access belong to
//! the host toolkit; it drives a [`TextBoxController`] and listens for its
//! change notifications.

pub mod config;
pub mod editable;
pub mod events;
pub mod interval;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::TextBoxConfig;
pub use editable::{CursorList, MoveTarget, TextBoxController, TextBoxMsg, TextCursor, TextEdit};
pub use events::SubscriptionId;
