//! Selection tests
//!
//! Tests for selection-only operations: growing, moving, select all,
//! deselect and the selection read accessors.

mod common;

use common::{ranges, test_controller, test_controller_with_selections};
use textbox_core::editable::{MoveTarget, TextBoxMsg, TextCursor};

#[test]
fn test_select_all() {
    let mut controller = test_controller("abc\ndef", &[2]);

    controller.apply(TextBoxMsg::SelectAll);

    assert_eq!(ranges(&controller), vec![(0, 7)]);
    assert_eq!(controller.carets(), vec![7]);
    assert_eq!(controller.selection_text(0), "abc\ndef");
}

#[test]
fn test_select_all_empty_buffer() {
    let mut controller = test_controller("", &[0]);

    controller.select_all();

    assert_eq!(ranges(&controller), vec![(0, 0)]);
    assert!(controller.first_selection().is_caret());
}

#[test]
fn test_grow_selections_keeps_anchor() {
    let mut controller = test_controller("abcdef", &[1, 4]);

    controller.grow_selections(|i| i + 1);

    assert_eq!(ranges(&controller), vec![(1, 2), (4, 5)]);
    assert_eq!(controller.carets(), vec![2, 5]);
}

#[test]
fn test_grow_selections_backwards() {
    let mut controller = test_controller("abcdef", &[4]);

    controller.grow_selections(|i| i - 3);

    assert_eq!(ranges(&controller), vec![(1, 4)]);
    assert!(controller.first_selection().caret_at_start());
}

#[test]
fn test_move_selections_carries_extent() {
    let mut controller = test_controller_with_selections("abcdefgh", &[(1, 3)]);

    controller.move_selections(|i| i + 2);

    assert_eq!(ranges(&controller), vec![(3, 5)]);
    assert_eq!(controller.carets(), vec![5]);
}

#[test]
fn test_select_right_then_left_shrinks() {
    let mut controller = test_controller("hello", &[1]);

    controller.select_right();
    controller.select_right();
    controller.select_left();

    assert_eq!(ranges(&controller), vec![(1, 2)]);
}

#[test]
fn test_select_by_word() {
    let mut controller = test_controller("hello world", &[0]);

    controller.select_right_by_word();
    assert_eq!(controller.selection_text(0), "hello");

    controller.apply(TextBoxMsg::Select(MoveTarget::End));
    assert_eq!(controller.selection_text(0), "hello world");
}

#[test]
fn test_select_home_from_end() {
    let mut controller = test_controller("  abc", &[5]);

    controller.select_home();

    assert_eq!(ranges(&controller), vec![(2, 5)]);
    assert_eq!(controller.carets(), vec![2]);
}

#[test]
fn test_deselect_to_end() {
    let mut controller = test_controller_with_selections("hello world", &[(6, 0)]);

    assert!(controller.deselect(false));
    assert_eq!(ranges(&controller), vec![(6, 6)]);
    assert!(!controller.deselect(false));
}

#[test]
fn test_deselect_to_start() {
    let mut controller = test_controller_with_selections("hello world", &[(0, 5), (6, 11)]);

    controller.apply(TextBoxMsg::Deselect { to_start: true });

    assert_eq!(controller.carets(), vec![0, 6]);
}

#[test]
fn test_deselect_merges_collapsed_carets() {
    let mut controller = test_controller_with_selections("abcdef", &[(0, 3), (3, 6)]);

    controller.deselect(false);

    // The first selection ends where the second starts
    assert_eq!(controller.carets(), vec![3, 6]);

    controller.set_selections([TextCursor::from_to(0, 3), TextCursor::from_to(3, 6)]);
    controller.deselect(true);
    assert_eq!(controller.carets(), vec![0, 3]);
}

#[test]
fn test_set_selection_clamps() {
    let mut controller = test_controller("abc", &[0]);

    controller.set_selection(TextCursor::from_to(1, 99));

    assert_eq!(ranges(&controller), vec![(1, 3)]);
    assert_eq!(controller.carets(), vec![3]);
}

#[test]
fn test_selection_accessors() {
    let controller = test_controller_with_selections("first\nsecond line", &[(0, 5), (13, 8)]);

    assert_eq!(controller.selection_count(), 2);
    assert_eq!(controller.selection_text(0), "first");
    assert_eq!(controller.selection_text(1), "cond ");
    assert_eq!(controller.selection_line_text(1), "second line");
    assert_eq!(controller.first_caret(), 5);
    assert_eq!(controller.last_caret(), 8);
    assert_eq!(controller.last_selection(), TextCursor::from_to(13, 8));
}

#[test]
fn test_word_at() {
    let controller = test_controller("let foo_bar = 1;", &[0]);

    assert_eq!(controller.word_at(6), (4, 11));
    assert_eq!(controller.word_at(4), (4, 11));
    assert_eq!(controller.word_at(13), (13, 13));
}

// ========================================================================
// Out-of-range Transforms
// ========================================================================

#[test]
fn test_move_selections_past_end_clamps() {
    let mut controller = test_controller("abc", &[1]);

    controller.move_selections(|i| i + 10);
    assert_eq!(ranges(&controller), vec![(3, 3)]);

    controller.insert_text("x");
    assert_eq!(controller.text(), "abcx");
    assert_eq!(controller.carets(), vec![4]);
}

#[test]
fn test_add_carets_past_end_clamps() {
    let mut controller = test_controller("abc", &[1]);

    controller.add_carets(|i| i + 10);
    assert_eq!(controller.carets(), vec![1, 3]);

    controller.backspace();
    assert_eq!(controller.text(), "b");
    assert_eq!(controller.carets(), vec![0, 1]);
}

#[test]
fn test_grow_selections_past_end_clamps() {
    let mut controller = test_controller("abc", &[1]);

    controller.grow_selections(|_| 50);
    assert_eq!(ranges(&controller), vec![(1, 3)]);
    assert_eq!(controller.first_selection(), TextCursor::from_to(1, 3));

    controller.delete();
    assert_eq!(controller.text(), "a");
    assert_eq!(controller.carets(), vec![1]);
}

#[test]
fn test_moving_selection_into_start_collapses_it() {
    let mut controller = test_controller_with_selections("hello", &[(0, 2)]);

    controller.move_left();
    controller.move_left();

    let cursor = controller.first_selection();
    assert_eq!(cursor, TextCursor::caret(0));
    assert_eq!(cursor.invert().range(), cursor.range());
    assert!(!controller.deselect(false));
}
