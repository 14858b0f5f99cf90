//! Text model for the editor: buffer, cursors, selections and undo.
//!
//! # Architecture
//!
//! - [`Document`]: line-structured text with rune-exact `(row, col)` edits
//! - [`UndoHistory`]: bounded stack of content snapshots
//! - [`Cursor`] / [`Position`]: buffer position plus last rendered anchor
//! - [`Selection`]: drag-ordered range, normalized on demand
//! - [`CursorManager`]: the non-empty set of cursors and which one is primary
//!
//! These types never fail on bad coordinates: edits outside the document
//! are no-ops, columns are clamped. Sequencing (snapshot before edit, cursor
//! relocation after) lives in [`crate::session::EditorSession`].

mod cursor;
mod cursor_manager;
mod document;
mod history;
mod selection;

pub use cursor::{Cursor, Point, Position};
pub use cursor_manager::CursorManager;
pub use document::Document;
pub use history::{UndoHistory, DEFAULT_UNDO_CAPACITY};
pub use selection::Selection;
