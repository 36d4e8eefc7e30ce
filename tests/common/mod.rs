//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use textbox_core::editable::{TextBoxController, TextCursor, TextEdit};

/// Create a controller with given text and plain carets
pub fn test_controller(text: &str, carets: &[usize]) -> TextBoxController {
    let mut controller = TextBoxController::from_text(text);
    controller.set_selections(carets.iter().map(|&c| TextCursor::caret(c)));
    controller
}

/// Create a controller with given text and `(anchor, caret)` selections
pub fn test_controller_with_selections(
    text: &str,
    selections: &[(usize, usize)],
) -> TextBoxController {
    let mut controller = TextBoxController::from_text(text);
    controller.set_selections(
        selections
            .iter()
            .map(|&(anchor, caret)| TextCursor::from_to(anchor, caret)),
    );
    controller
}

/// Every `(start, end)` range in the controller, in order
pub fn ranges(controller: &TextBoxController) -> Vec<(usize, usize)> {
    controller.selections().iter().map(|s| s.range()).collect()
}

/// Record every text-changed batch fired by `controller`
pub fn record_edits(controller: &mut TextBoxController) -> Rc<RefCell<Vec<Vec<TextEdit>>>> {
    let batches = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&batches);
    controller.on_text_changed(move |edits| sink.borrow_mut().push(edits.to_vec()));
    batches
}

/// Count selection-changed notifications fired by `controller`
pub fn count_selection_changes(controller: &mut TextBoxController) -> Rc<RefCell<usize>> {
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    controller.on_selection_changed(move |_| *sink.borrow_mut() += 1);
    count
}
