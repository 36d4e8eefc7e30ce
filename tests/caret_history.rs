//! Caret location history tests
//!
//! Tests for storing caret snapshots around edits and stepping back and
//! forward through them.

mod common;

use common::{test_controller, test_controller_with_selections};
use textbox_core::config::TextBoxConfig;
use textbox_core::editable::{TextBoxController, TextBoxMsg};

#[test]
fn test_store_previous_next_round_trip() {
    let mut controller = test_controller("hello world", &[2]);
    controller.store_caret_locations();
    controller.set_caret(8);

    controller.restore_previous_selections();
    assert_eq!(controller.carets(), vec![2]);

    controller.restore_next_selections();
    assert_eq!(controller.carets(), vec![8]);
}

#[test]
fn test_restore_with_empty_history_is_noop() {
    let mut controller = test_controller("hello", &[3]);

    controller.restore_previous_selections();
    assert_eq!(controller.carets(), vec![3]);

    controller.restore_next_selections();
    assert_eq!(controller.carets(), vec![3]);
}

#[test]
fn test_restored_selections_are_plain_carets() {
    let mut controller = test_controller_with_selections("hello world", &[(0, 5), (6, 11)]);
    controller.store_caret_locations();
    controller.set_caret(0);

    controller.restore_previous_selections();

    assert_eq!(controller.carets(), vec![5, 11]);
    assert!(controller.selections().iter().all(|s| s.is_caret()));
}

#[test]
fn test_edit_after_selection_change_stores_once() {
    let mut controller = test_controller("abc", &[0]);
    controller.set_caret(1);

    controller.insert_text("x");
    controller.insert_text("y");

    // One snapshot from the first edit, plus the current carets stored on
    // the way back
    controller.restore_previous_selections();
    assert_eq!(controller.carets(), vec![1]);
    assert_eq!(controller.history().len(), 2);

    controller.restore_previous_selections();
    assert_eq!(controller.carets(), vec![1]);

    controller.restore_next_selections();
    assert_eq!(controller.carets(), vec![3]);
}

#[test]
fn test_typing_does_not_store_per_keystroke() {
    let mut controller = test_controller("", &[0]);
    controller.set_caret(0);

    for c in "hello".chars() {
        controller.apply(TextBoxMsg::Insert(c.to_string()));
    }

    assert_eq!(controller.history().len(), 1);
}

#[test]
fn test_store_truncates_redo_tail() {
    let mut controller = test_controller("0123456789", &[1]);
    controller.store_caret_locations();
    controller.set_caret(2);
    controller.store_caret_locations();
    controller.set_caret(3);

    controller.restore_previous_selections();
    controller.restore_previous_selections();
    assert_eq!(controller.carets(), vec![1]);

    controller.set_caret(9);
    controller.store_caret_locations();

    // Storing from a restored position drops the redo tail
    assert_eq!(controller.history().len(), 1);
    controller.restore_next_selections();
    assert_eq!(controller.carets(), vec![9]);
}

#[test]
fn test_history_limit_from_config() {
    let config = TextBoxConfig {
        history_limit: 2,
        ..TextBoxConfig::default()
    };
    let mut controller = TextBoxController::with_config(config);
    controller.set_text("0123456789");

    for caret in [1, 2, 3, 4] {
        controller.set_caret(caret);
        controller.store_caret_locations();
    }

    assert_eq!(controller.history().len(), 2);
}

#[test]
fn test_restore_clamps_to_shorter_text() {
    let mut controller = test_controller("hello world", &[11]);
    controller.store_caret_locations();
    controller.set_text("hi");

    controller.restore_previous_selections();

    assert_eq!(controller.carets(), vec![2]);
}
