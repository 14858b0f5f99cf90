//! Selection ranges.
//!
//! A selection keeps the order it was made in: `start` is where the drag
//! began, `end` is where it currently is, so `start` may come after `end`.
//! Every consumer goes through [`Selection::normalized`] before asking about
//! containment or extracting text.

use super::cursor::Position;
use super::document::Document;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
    pub active: bool,
}

impl Selection {
    pub const fn inactive() -> Self {
        Self {
            start: Position::zero(),
            end: Position::zero(),
            active: false,
        }
    }

    pub fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            active: true,
        }
    }

    /// Activate and anchor at `pos`. The selection is empty until extended.
    pub fn start_at(&mut self, pos: Position) {
        self.start = pos;
        self.end = pos;
        self.active = true;
    }

    /// Move the free end. `start` stays where it was anchored.
    pub fn extend_to(&mut self, pos: Position) {
        self.end = pos;
    }

    pub fn clear(&mut self) {
        self.active = false;
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Active and covering at least one rune or line break
    pub fn has_content(&self) -> bool {
        self.active && !self.is_empty()
    }

    /// True if the drag went backwards (end before start)
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }

    /// `(start, end)` with start textually first
    pub fn normalized(&self) -> (Position, Position) {
        if self.is_reversed() {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        }
    }

    /// Start inclusive, end exclusive, in row-major order.
    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        if !self.active {
            return false;
        }
        let (start, end) = self.normalized();
        let pos = Position::new(row, col);
        pos >= start && pos < end
    }

    /// The runes covered by the range, rows joined by `\n`.
    /// Rows outside the document produce an empty string.
    pub fn extract_text(&self, doc: &Document) -> String {
        let (start, end) = self.normalized();
        doc.text_in_range(start, end)
    }

    /// Pull both endpoints back inside `doc`
    pub fn clamp_to(&mut self, doc: &Document) {
        self.start = doc.clamp_position(self.start);
        self.end = doc.clamp_position(self.end);
    }
}
