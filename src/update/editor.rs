//! Cursor, selection and pointer messages

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::session::EditorSession;

/// Handle editor messages (cursor movement, selection, pointer)
pub fn update_editor(session: &mut EditorSession, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => {
            session.move_cursor(direction);
            Some(Cmd::Redraw)
        }

        EditorMsg::MoveCursorWithSelection(direction) => {
            session.move_cursor_with_selection(direction);
            Some(Cmd::Redraw)
        }

        EditorMsg::MoveCursorLineStart => {
            session.move_cursor_line_start();
            Some(Cmd::Redraw)
        }

        EditorMsg::MoveCursorLineEnd => {
            session.move_cursor_line_end();
            Some(Cmd::Redraw)
        }

        EditorMsg::SetCursorPosition { row, col } => {
            session.set_cursor_position(row, col);
            Some(Cmd::Redraw)
        }

        EditorMsg::SetSelectionAnchor { row, col } => {
            session.set_selection_anchor(row, col);
            Some(Cmd::Redraw)
        }

        EditorMsg::ExtendSelectionTo { row, col } => {
            session.extend_selection_to(row, col);
            Some(Cmd::Redraw)
        }

        EditorMsg::ClearSelection => {
            if !session.has_selection() {
                return None;
            }
            session.clear_selection();
            Some(Cmd::Redraw)
        }

        EditorMsg::SelectAll => {
            session.select_all();
            Some(Cmd::Redraw)
        }

        EditorMsg::PointerDown { x, y } => {
            session.pointer_down(x, y);
            Some(Cmd::Redraw)
        }

        EditorMsg::PointerDrag { x, y } => {
            if session.pointer_drag(x, y) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        EditorMsg::PointerUp { x, y } => {
            session.pointer_up(x, y);
            Some(Cmd::Redraw)
        }
    }
}
