//! The line-structured text buffer and its structural edits.
//!
//! Backed by `ropey::Rope` built without CR/Unicode line breaks, so a row is
//! exactly the text between two `\n`. Columns are char (rune) offsets and a
//! column equal to the line length means "after the last character".
//!
//! None of these operations fail. Rows outside the document turn an edit
//! into a no-op and columns are clamped to the line.

use std::fmt;

use ropey::Rope;

use super::cursor::Position;

#[derive(Debug, Clone, Default)]
pub struct Document {
    rope: Rope,
}

impl Document {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Access the underlying Rope
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Number of rows (always >= 1, an empty document is one empty row)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    /// Length of a row in runes, excluding the newline. 0 for rows out of range.
    pub fn line_length(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(row);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Row content without its trailing newline
    pub fn line_text(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let len = self.line_length(row);
        Some(self.rope.line(row).slice(..len).to_string())
    }

    /// Rune at `(row, col)`, None past the end of the row
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rope.len_lines() || col >= self.line_length(row) {
            return None;
        }
        Some(self.rope.char(self.rope.line_to_char(row) + col))
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Full content as a String
    pub fn content(&self) -> String {
        self.rope.to_string()
    }

    /// Replace everything (used when restoring an undo snapshot)
    pub fn set_content(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Position after the last rune of the last row
    pub fn end_position(&self) -> Position {
        let last = self.line_count() - 1;
        Position::new(last, self.line_length(last))
    }

    /// Nearest valid position: row into `[0, line_count)`, then column into
    /// `[0, line_length]`.
    pub fn clamp_position(&self, pos: Position) -> Position {
        let row = pos.row.min(self.line_count() - 1);
        Position::new(row, pos.col.min(self.line_length(row)))
    }

    /// Char offset of `(row, col)`, column clamped to the row.
    /// Rows past the end map to the end of the document.
    pub fn position_to_offset(&self, row: usize, col: usize) -> usize {
        if row >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(row) + col.min(self.line_length(row))
    }

    pub fn offset_to_position(&self, offset: usize) -> Position {
        let clamped = offset.min(self.rope.len_chars());
        let row = self.rope.char_to_line(clamped);
        Position::new(row, clamped - self.rope.line_to_char(row))
    }

    fn has_row(&self, row: usize) -> bool {
        row < self.line_count()
    }

    /// Insert `text` at `(row, col)`.
    ///
    /// Embedded newlines split the row: it keeps its prefix plus the first
    /// inserted line, and the suffix follows the last inserted line.
    /// Returns the position just after the inserted text, or None (and
    /// leaves the document alone) if `row` does not exist.
    pub fn insert_at(&mut self, row: usize, col: usize, text: &str) -> Option<Position> {
        if !self.has_row(row) {
            return None;
        }
        let col = col.min(self.line_length(row));
        let offset = self.position_to_offset(row, col);
        self.rope.insert(offset, text);

        let inserted = text.chars().count();
        Some(self.offset_to_position(offset + inserted))
    }

    /// Backspace at `(row, col)`.
    ///
    /// Inside a row this removes the rune before `col`. At column 0 it joins
    /// the row onto the previous one and the cursor lands where the previous
    /// row used to end. Returns the new cursor position, None for a no-op
    /// (document start or a row that does not exist).
    pub fn delete_char_before(&mut self, row: usize, col: usize) -> Option<Position> {
        if !self.has_row(row) {
            return None;
        }
        let col = col.min(self.line_length(row));
        if col > 0 {
            let offset = self.position_to_offset(row, col);
            self.rope.remove(offset - 1..offset);
            return Some(Position::new(row, col - 1));
        }
        if row == 0 {
            return None;
        }

        let joined_at = self.line_length(row - 1);
        let newline = self.rope.line_to_char(row) - 1;
        self.rope.remove(newline..newline + 1);
        Some(Position::new(row - 1, joined_at))
    }

    /// Remove the text between two positions, in either order.
    ///
    /// Across rows, the start row's prefix is joined with the end row's
    /// suffix and everything between disappears. Returns false if nothing
    /// changed (empty range or a row out of range).
    pub fn delete_range(&mut self, a: Position, b: Position) -> bool {
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        if !self.has_row(start.row) || !self.has_row(end.row) {
            return false;
        }
        let from = self.position_to_offset(start.row, start.col);
        let to = self.position_to_offset(end.row, end.col);
        if from >= to {
            return false;
        }
        self.rope.remove(from..to);
        true
    }

    /// Text between two positions (either order), rows joined by `\n`.
    /// Empty if either row is out of range.
    pub fn text_in_range(&self, a: Position, b: Position) -> String {
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        if !self.has_row(start.row) || !self.has_row(end.row) {
            return String::new();
        }
        let from = self.position_to_offset(start.row, start.col);
        let to = self.position_to_offset(end.row, end.col);
        if from >= to {
            return String::new();
        }
        self.rope.slice(from..to).to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
