//! JSON dumps of a session for diagnostics
//!
//! `--dump state` and `--dump layout` print these after a script ran.

use serde::Serialize;

use crate::editable::{Point, Position};
use crate::layout::{Layout, LayoutParams, LayoutRow};
use crate::session::EditorSession;

#[derive(Serialize)]
pub struct StateDump {
    pub line_count: usize,
    pub char_count: usize,
    pub revision: u64,
    pub undo_depth: usize,
    pub undo_capacity: usize,
    pub primary_cursor: usize,
    pub cursors: Vec<CursorDump>,
    pub viewport: ViewportDump,
}

#[derive(Serialize)]
pub struct CursorDump {
    pub position: Position,
    pub anchor: Option<Point>,
    pub selection: Option<SelectionDump>,
}

#[derive(Serialize)]
pub struct SelectionDump {
    pub start: Position,
    pub end: Position,
    pub text: String,
}

#[derive(Serialize)]
pub struct ViewportDump {
    pub width: f32,
    pub height: f32,
    pub zoom: f32,
    pub font_size: u32,
    pub line_height: f32,
    pub scroll_offset: f32,
}

#[derive(Serialize)]
pub struct LayoutDump<'a> {
    pub params: &'a LayoutParams,
    pub content_bottom: f32,
    pub rows: &'a [LayoutRow],
}

impl StateDump {
    /// Builds the layout first so cursor anchors are current
    pub fn from_session(session: &mut EditorSession) -> Self {
        session.layout();

        let doc = session.document();
        let cursors = session
            .cursors()
            .cursors()
            .iter()
            .map(|c| CursorDump {
                position: c.to_position(),
                anchor: c.anchor,
                selection: c.selection.active.then(|| SelectionDump {
                    start: c.selection.start,
                    end: c.selection.end,
                    text: c.selection.extract_text(doc),
                }),
            })
            .collect();

        let view = session.view();
        Self {
            line_count: doc.line_count(),
            char_count: doc.len_chars(),
            revision: session.revision(),
            undo_depth: session.history().len(),
            undo_capacity: session.history().capacity(),
            primary_cursor: session.cursors().primary_index(),
            cursors,
            viewport: ViewportDump {
                width: view.width,
                height: view.height,
                zoom: view.zoom,
                font_size: view.font_size(),
                line_height: view.line_height(),
                scroll_offset: view.scroll.offset(),
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

impl<'a> LayoutDump<'a> {
    pub fn from_layout(layout: &'a Layout) -> Self {
        Self {
            params: layout.params(),
            content_bottom: layout.content_bottom(),
            rows: layout.rows(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
