//! Text editing and undo messages

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::session::EditorSession;

/// Handle document messages. Edits that change nothing ask for no redraw.
pub fn update_document(session: &mut EditorSession, msg: DocumentMsg) -> Option<Cmd> {
    let changed = match msg {
        DocumentMsg::InsertText(text) => session.apply_text_input(&text),
        DocumentMsg::DeleteBackward => session.apply_backspace(),
        DocumentMsg::InsertNewline => session.apply_enter(),
        DocumentMsg::InsertTab => session.apply_tab(),
        DocumentMsg::Paste(text) => session.paste(&text),
        DocumentMsg::Undo => session.undo(),
    };

    if changed {
        Some(Cmd::Redraw)
    } else {
        None
    }
}
