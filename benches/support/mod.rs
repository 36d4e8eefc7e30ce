//! Shared helpers for benchmarks

use textbox_core::editable::{TextBoxController, TextCursor};

/// Create a controller holding `lines` lines of text with no carets placed
#[allow(dead_code)]
pub fn make_controller(lines: usize) -> TextBoxController {
    let text = "The quick brown fox jumps over the lazy dog.\n".repeat(lines);
    TextBoxController::from_text(&text)
}

/// Create a controller with one caret at the start of each of `lines` lines
#[allow(dead_code)]
pub fn make_controller_with_carets(lines: usize) -> TextBoxController {
    let mut controller = make_controller(lines);
    let carets: Vec<TextCursor> = (0..lines)
        .map(|line| TextCursor::caret(controller.line_start(line)))
        .collect();
    controller.set_selections(carets);
    controller
}
