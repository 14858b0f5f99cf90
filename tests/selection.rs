//! Selection tests - anchoring, extending, pointer drags, select all

mod common;

use common::{cell_center, click, cursor, send, test_session, test_session_with_selection};
use runepad::editable::{Document, Position, Selection};
use runepad::messages::{Direction, EditorMsg};

// ========================================================================
// Selection value tests
// ========================================================================

#[test]
fn test_is_selected_end_exclusive() {
    let sel = Selection::new(Position::new(0, 0), Position::new(0, 3));
    assert!(sel.is_selected(0, 0));
    assert!(sel.is_selected(0, 2));
    assert!(!sel.is_selected(0, 3));
}

#[test]
fn test_is_selected_normalizes_reversed_range() {
    let sel = Selection::new(Position::new(2, 1), Position::new(0, 4));
    assert!(sel.is_selected(0, 4));
    assert!(sel.is_selected(1, 0));
    assert!(sel.is_selected(1, 99));
    assert!(sel.is_selected(2, 0));
    assert!(!sel.is_selected(2, 1));
    assert!(!sel.is_selected(0, 3));
}

#[test]
fn test_inactive_selects_nothing() {
    let mut sel = Selection::new(Position::new(0, 0), Position::new(0, 3));
    sel.clear();
    assert!(!sel.is_selected(0, 1));
    // positions survive clearing
    assert_eq!(sel.end, Position::new(0, 3));
}

#[test]
fn test_empty_selection_selects_nothing() {
    let sel = Selection::new(Position::new(1, 2), Position::new(1, 2));
    assert!(sel.is_empty());
    assert!(!sel.has_content());
    assert!(!sel.is_selected(1, 2));
}

#[test]
fn test_extract_text_across_rows() {
    let doc = Document::with_text("abc\ndef\nghi");
    let sel = Selection::new(Position::new(2, 2), Position::new(0, 1));
    assert_eq!(sel.extract_text(&doc), "bc\ndef\ngh");
}

#[test]
fn test_extract_text_out_of_range_is_empty() {
    let doc = Document::with_text("abc");
    let sel = Selection::new(Position::new(0, 1), Position::new(5, 0));
    assert_eq!(sel.extract_text(&doc), "");
}

// ========================================================================
// Session selection operations
// ========================================================================

#[test]
fn test_anchor_then_extend() {
    let mut session = test_session("hello world", 0, 0);
    send(&mut session, EditorMsg::SetSelectionAnchor { row: 0, col: 6 });
    send(&mut session, EditorMsg::ExtendSelectionTo { row: 0, col: 11 });

    assert_eq!(session.selected_text(), "world");
    assert_eq!(cursor(&session), Position::new(0, 11));
    let sel = session.cursors().primary().selection;
    assert_eq!(sel.start, Position::new(0, 6));
}

#[test]
fn test_extend_does_not_move_anchor() {
    let mut session = test_session_with_selection("abcdef", 0, 3, 0, 5);
    send(&mut session, EditorMsg::ExtendSelectionTo { row: 0, col: 1 });

    let sel = session.cursors().primary().selection;
    assert_eq!(sel.start, Position::new(0, 3));
    assert_eq!(sel.end, Position::new(0, 1));
    assert_eq!(session.selected_text(), "bc");
}

#[test]
fn test_extend_clamps_out_of_range_target() {
    let mut session = test_session("ab\ncd", 0, 0);
    send(&mut session, EditorMsg::SetSelectionAnchor { row: 0, col: 1 });
    send(&mut session, EditorMsg::ExtendSelectionTo { row: 9, col: 9 });

    assert_eq!(cursor(&session), Position::new(1, 2));
    assert_eq!(session.selected_text(), "b\ncd");
}

#[test]
fn test_clear_selection_keeps_positions() {
    let mut session = test_session_with_selection("abcdef", 0, 1, 0, 4);
    send(&mut session, EditorMsg::ClearSelection);

    assert!(!session.has_selection());
    assert_eq!(cursor(&session), Position::new(0, 4));
}

#[test]
fn test_select_all() {
    let mut session = test_session("one\ntwo\n", 0, 2);
    send(&mut session, EditorMsg::SelectAll);

    assert_eq!(session.selected_text(), "one\ntwo\n");
    assert_eq!(cursor(&session), Position::new(2, 0));
}

#[test]
fn test_delete_selection_moves_cursor_to_start() {
    let mut session = test_session_with_selection("ab\ncd\nef", 2, 1, 0, 1);
    assert!(session.delete_selection());

    assert_eq!(session.text(), "af");
    assert_eq!(cursor(&session), Position::new(0, 1));
    assert!(!session.delete_selection());
}

#[test]
fn test_shift_arrows_grow_and_shrink() {
    let mut session = test_session("abcdef", 0, 2);
    send(&mut session, EditorMsg::MoveCursorWithSelection(Direction::Right));
    send(&mut session, EditorMsg::MoveCursorWithSelection(Direction::Right));
    assert_eq!(session.selected_text(), "cd");

    send(&mut session, EditorMsg::MoveCursorWithSelection(Direction::Left));
    assert_eq!(session.selected_text(), "c");
}

#[test]
fn test_shift_down_selects_to_next_row() {
    let mut session = test_session("abc\ndef", 0, 1);
    send(&mut session, EditorMsg::MoveCursorWithSelection(Direction::Down));
    assert_eq!(session.selected_text(), "bc\nd");
}

#[test]
fn test_plain_arrow_clears_selection() {
    let mut session = test_session_with_selection("abcdef", 0, 1, 0, 4);
    send(&mut session, EditorMsg::MoveCursor(Direction::Right));

    assert!(!session.has_selection());
    assert_eq!(cursor(&session), Position::new(0, 5));
}

// ========================================================================
// Pointer selection
// ========================================================================

#[test]
fn test_click_places_cursor_without_selection() {
    let mut session = test_session("hello\nworld", 0, 0);
    let (x, y) = cell_center(1, 3);
    click(&mut session, x, y);

    assert_eq!(cursor(&session), Position::new(1, 3));
    assert!(!session.has_selection());
    assert!(!session.is_dragging());
}

#[test]
fn test_drag_selects_range() {
    let mut session = test_session("hello\nworld", 0, 0);
    let (x0, y0) = cell_center(0, 1);
    let (x1, y1) = cell_center(1, 2);

    send(&mut session, EditorMsg::PointerDown { x: x0, y: y0 });
    send(&mut session, EditorMsg::PointerDrag { x: x1, y: y1 });
    assert!(session.is_dragging());
    send(&mut session, EditorMsg::PointerUp { x: x1, y: y1 });

    assert_eq!(session.selected_text(), "ello\nwo");
    assert_eq!(cursor(&session), Position::new(1, 2));
}

#[test]
fn test_backwards_drag() {
    let mut session = test_session("hello world", 0, 0);
    let (x0, y0) = cell_center(0, 8);
    let (x1, y1) = cell_center(0, 2);

    send(&mut session, EditorMsg::PointerDown { x: x0, y: y0 });
    send(&mut session, EditorMsg::PointerDrag { x: x1, y: y1 });
    send(&mut session, EditorMsg::PointerUp { x: x1, y: y1 });

    assert_eq!(session.selected_text(), "llo wo");
    assert!(session.cursors().primary().selection.is_reversed());
}

#[test]
fn test_drag_without_press_is_ignored() {
    let mut session = test_session("hello", 0, 0);
    let (x, y) = cell_center(0, 3);
    send(&mut session, EditorMsg::PointerDrag { x, y });

    assert_eq!(cursor(&session), Position::new(0, 0));
    assert!(!session.has_selection());
}

#[test]
fn test_drag_past_line_end_selects_to_end() {
    let mut session = test_session("ab\ncdef", 1, 0);
    let (x0, y0) = cell_center(0, 0);
    let (_, y1) = cell_center(0, 0);

    send(&mut session, EditorMsg::PointerDown { x: x0, y: y0 });
    send(&mut session, EditorMsg::PointerDrag { x: 140.0, y: y1 });
    send(&mut session, EditorMsg::PointerUp { x: 140.0, y: y1 });

    assert_eq!(session.selected_text(), "ab");
}
