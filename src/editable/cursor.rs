//! Cursor and position types for the editing engine.

use serde::{Deserialize, Serialize};

use super::selection::Selection;

/// A position in the document (row and rune column, both 0-indexed).
///
/// Ordering is row-major, then column, which is the order selections
/// normalize by.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// A point in layout space (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A cursor: an authoritative buffer position, the pixel anchor it was last
/// rendered at, and its selection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
    /// Where the cursor was placed by the last layout pass.
    /// Derived data: overwritten on every rebuild, never read back into
    /// `row`/`col`.
    pub anchor: Option<Point>,
    pub selection: Selection,
}

impl Cursor {
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            anchor: None,
            selection: Selection::inactive(),
        }
    }

    pub fn at_position(pos: Position) -> Self {
        Self::new(pos.row, pos.col)
    }

    pub const fn to_position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Move to `pos` without touching the selection
    pub fn set_position(&mut self, pos: Position) {
        self.row = pos.row;
        self.col = pos.col;
    }
}

impl From<Position> for Cursor {
    fn from(pos: Position) -> Self {
        Self::at_position(pos)
    }
}

impl From<Cursor> for Position {
    fn from(cursor: Cursor) -> Self {
        cursor.to_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        let a = Position::new(0, 5);
        let b = Position::new(1, 0);
        let c = Position::new(1, 3);

        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }

    #[test]
    fn test_new_cursor_has_no_selection_or_anchor() {
        let cursor = Cursor::new(2, 4);
        assert!(!cursor.selection.active);
        assert!(cursor.anchor.is_none());
    }

    #[test]
    fn test_set_position_keeps_selection() {
        let mut cursor = Cursor::new(0, 0);
        cursor.selection.start_at(Position::new(0, 0));
        cursor.set_position(Position::new(1, 2));

        assert_eq!(cursor.to_position(), Position::new(1, 2));
        assert!(cursor.selection.active);
    }
}
