//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use runepad::config::EditorConfig;
use runepad::editable::Position;
use runepad::layout::MonospaceMetrics;
use runepad::messages::{DocumentMsg, EditorMsg, Msg};
use runepad::update::update;
use runepad::EditorSession;

/// Every glyph is 10 px wide
pub const ADVANCE: f32 = 10.0;
pub const LINE_HEIGHT: f32 = 20.0;
/// With the default margins the wrap limit is 150, so 14 glyphs per row
pub const VIEWPORT_WIDTH: f32 = 200.0;
pub const LEFT: f32 = 10.0;
pub const TOP: f32 = 10.0;

/// 15 px font at zoom 1: rows are 15 + 15 / 3 = 20 px
pub fn test_config() -> EditorConfig {
    EditorConfig {
        font_size: 15,
        zoom: 1.0,
        ..EditorConfig::default()
    }
}

/// Session with fixed 10 px glyphs, 20 px rows and a 200 px viewport,
/// cursor at `(row, col)`. The geometry belongs to the session, so
/// relayouts after edits keep it.
pub fn test_session(text: &str, row: usize, col: usize) -> EditorSession {
    let mut session = EditorSession::with_config(text, &test_config(), VIEWPORT_WIDTH, 600.0);
    session.set_metrics(Box::new(MonospaceMetrics::new(ADVANCE)));
    session.set_cursor_position(row, col);
    session
}

/// Same as [`test_session`] with a selection from start to end; the cursor
/// sits at the end
pub fn test_session_with_selection(
    text: &str,
    start_row: usize,
    start_col: usize,
    end_row: usize,
    end_col: usize,
) -> EditorSession {
    let mut session = test_session(text, start_row, start_col);
    session.set_selection_anchor(start_row, start_col);
    session.extend_selection_to(end_row, end_col);
    session
}

pub fn cursor(session: &EditorSession) -> Position {
    session.cursor_position()
}

/// Pixel center of the cell at a buffer position, in the test geometry
pub fn cell_center(row: usize, col: usize) -> (f32, f32) {
    (
        LEFT + col as f32 * ADVANCE + ADVANCE / 2.0,
        TOP + row as f32 * LINE_HEIGHT + LINE_HEIGHT / 2.0,
    )
}

pub fn type_text(session: &mut EditorSession, text: &str) {
    update(session, Msg::Document(DocumentMsg::InsertText(text.to_string())));
}

pub fn send(session: &mut EditorSession, msg: impl Into<Msg>) {
    update(session, msg.into());
}

pub fn click(session: &mut EditorSession, x: f32, y: f32) {
    send(session, EditorMsg::PointerDown { x, y });
    send(session, EditorMsg::PointerUp { x, y });
}
