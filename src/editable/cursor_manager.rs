//! The set of cursors in a session.
//!
//! Holds any number of cursors, one of them primary. Only the primary
//! cursor is driven by input today; the rest are carried along (clamped,
//! cleared, re-anchored) so multi-cursor editing can be layered on later.

use super::cursor::{Cursor, Position};
use super::document::Document;

#[derive(Debug, Clone)]
pub struct CursorManager {
    cursors: Vec<Cursor>,
    primary: usize,
}

impl CursorManager {
    pub fn new() -> Self {
        Self {
            cursors: vec![Cursor::new(0, 0)],
            primary: 0,
        }
    }

    pub fn primary(&self) -> &Cursor {
        &self.cursors[self.primary]
    }

    pub fn primary_mut(&mut self) -> &mut Cursor {
        &mut self.cursors[self.primary]
    }

    pub fn primary_index(&self) -> usize {
        self.primary
    }

    pub fn cursors(&self) -> &[Cursor] {
        &self.cursors
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cursor> {
        self.cursors.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Never true; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Add a secondary cursor, returning its index
    pub fn add_cursor(&mut self, pos: Position) -> usize {
        self.cursors.push(Cursor::at_position(pos));
        self.cursors.len() - 1
    }

    /// Drop every cursor except the primary one
    pub fn collapse_to_primary(&mut self) {
        let primary = self.cursors[self.primary];
        self.cursors = vec![primary];
        self.primary = 0;
    }

    /// Make `index` the primary cursor. Out-of-range indices are ignored.
    pub fn set_primary(&mut self, index: usize) {
        if index < self.cursors.len() {
            self.primary = index;
        }
    }

    /// Deactivate every selection; positions stay where they are
    pub fn clear_all_selections(&mut self) {
        for cursor in &mut self.cursors {
            cursor.selection.clear();
        }
    }

    pub fn has_selection(&self) -> bool {
        self.cursors.iter().any(|c| c.selection.has_content())
    }

    /// Pull every cursor and selection endpoint back inside `doc`
    pub fn clamp_to(&mut self, doc: &Document) {
        for cursor in &mut self.cursors {
            let pos = doc.clamp_position(cursor.to_position());
            cursor.set_position(pos);
            cursor.selection.clamp_to(doc);
        }
    }
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_one_cursor_at_origin() {
        let cm = CursorManager::new();
        assert_eq!(cm.len(), 1);
        assert_eq!(cm.primary().to_position(), Position::zero());
    }

    #[test]
    fn test_clear_all_selections_keeps_positions() {
        let mut cm = CursorManager::new();
        cm.add_cursor(Position::new(1, 1));
        for cursor in cm.iter_mut() {
            cursor.selection.start_at(Position::new(0, 0));
            cursor.selection.extend_to(Position::new(0, 2));
        }
        assert!(cm.has_selection());

        cm.clear_all_selections();
        assert!(!cm.has_selection());
        assert_eq!(cm.cursors()[1].to_position(), Position::new(1, 1));
    }

    #[test]
    fn test_collapse_to_primary() {
        let mut cm = CursorManager::new();
        let idx = cm.add_cursor(Position::new(2, 0));
        cm.set_primary(idx);
        cm.collapse_to_primary();
        assert_eq!(cm.len(), 1);
        assert_eq!(cm.primary().to_position(), Position::new(2, 0));
    }

    #[test]
    fn test_clamp_to_document() {
        let doc = Document::with_text("ab");
        let mut cm = CursorManager::new();
        cm.primary_mut().set_position(Position::new(3, 9));
        cm.primary_mut().selection = crate::editable::Selection::new(
            Position::new(0, 1),
            Position::new(5, 5),
        );
        cm.clamp_to(&doc);
        assert_eq!(cm.primary().to_position(), Position::new(0, 2));
        assert_eq!(cm.primary().selection.end, Position::new(0, 2));
    }
}
