//! Wrapped glyph layout: the single mapping between buffer positions and
//! pixels.
//!
//! [`Layout::build`] walks the document once and records every glyph it
//! places. Drawing, hit-testing ([`Layout::hit_test`]) and cursor placement
//! ([`Layout::pixel_of`]) all read that one table, so a click and the cursor
//! it produces can never disagree about where a rune is.
//!
//! Wrapping is greedy per glyph with no word-boundary awareness: when the
//! next glyph would cross `viewport_width - right_margin` it starts a new
//! visual row at the left margin.

mod ligature;
mod metrics;

use serde::Serialize;

use crate::editable::{Document, Point, Position};

pub use ligature::{is_ligature, LIGATURES};
pub use metrics::{GlyphMetrics, MonospaceMetrics};

/// A tab is measured as this run
const TAB_AS_SPACES: &str = "    ";

pub const DEFAULT_LEFT_MARGIN: f32 = 10.0;
pub const DEFAULT_TOP_MARGIN: f32 = 10.0;
pub const DEFAULT_RIGHT_MARGIN: f32 = 50.0;

/// Everything besides the document and the oracle that shapes a layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutParams {
    pub viewport_width: f32,
    pub line_height: f32,
    pub left_margin: f32,
    pub top_margin: f32,
    pub right_margin: f32,
    /// Merge the pairs in [`LIGATURES`] into single glyphs
    pub ligatures: bool,
}

impl LayoutParams {
    pub fn new(viewport_width: f32, line_height: f32) -> Self {
        Self {
            viewport_width,
            line_height,
            left_margin: DEFAULT_LEFT_MARGIN,
            top_margin: DEFAULT_TOP_MARGIN,
            right_margin: DEFAULT_RIGHT_MARGIN,
            ligatures: true,
        }
    }

    pub fn with_margins(mut self, left: f32, top: f32, right: f32) -> Self {
        self.left_margin = left;
        self.top_margin = top;
        self.right_margin = right;
        self
    }

    pub fn with_ligatures(mut self, enabled: bool) -> Self {
        self.ligatures = enabled;
        self
    }

    /// A glyph may not extend past this x
    pub fn wrap_limit(&self) -> f32 {
        self.viewport_width - self.right_margin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphKind {
    /// One rune, or a two-rune ligature
    Glyph,
    /// Zero-width marker after the last rune of a buffer row
    LineEnd,
}

/// One placed glyph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedGlyph {
    pub buffer_row: usize,
    pub buffer_col: usize,
    /// Runes covered: 1, 2 for a ligature, 0 for a line end
    pub len: usize,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub kind: GlyphKind,
}

impl PlacedGlyph {
    pub fn position(&self) -> Position {
        Position::new(self.buffer_row, self.buffer_col)
    }

    fn contains_x(&self, x: f32) -> bool {
        self.x <= x && x < self.x + self.width
    }
}

/// One visual row. A buffer row that wraps produces several.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutRow {
    pub buffer_row: usize,
    pub y: f32,
    pub glyphs: Vec<PlacedGlyph>,
}

impl LayoutRow {
    fn new(buffer_row: usize, y: f32) -> Self {
        Self {
            buffer_row,
            y,
            glyphs: Vec::new(),
        }
    }

    fn contains_y(&self, y: f32, line_height: f32) -> bool {
        self.y <= y && y < self.y + line_height
    }

    /// Column for a click at `x` inside this row's band: the glyph under
    /// `x`, else the first glyph when left of it, else the row's last
    /// entry. On the final visual row of a line that is the line end. On
    /// an earlier wrapped row it is the last glyph, so the cursor stays on
    /// the visual row that was clicked.
    fn position_at_x(&self, x: f32) -> Position {
        if let Some(glyph) = self.glyphs.iter().find(|g| g.contains_x(x)) {
            return glyph.position();
        }
        match (self.glyphs.first(), self.glyphs.last()) {
            (Some(first), _) if x < first.x => first.position(),
            (_, Some(last)) => last.position(),
            _ => Position::new(self.buffer_row, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    params: LayoutParams,
    rows: Vec<LayoutRow>,
    /// Index into `rows` of the first visual row of each buffer row
    #[serde(skip)]
    line_starts: Vec<usize>,
    /// y just below the last row
    content_bottom: f32,
}

fn measure<M: GlyphMetrics + ?Sized>(metrics: &M, text: &str) -> f32 {
    let width = if text == "\t" {
        metrics.width(TAB_AS_SPACES)
    } else {
        metrics.width(text)
    };
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

impl Layout {
    /// Lay out `doc`. A pure function of its inputs: the same document,
    /// oracle and params always give an identical table.
    pub fn build<M: GlyphMetrics + ?Sized>(
        doc: &Document,
        metrics: &M,
        params: LayoutParams,
    ) -> Self {
        let line_height = params.line_height;
        let limit = params.wrap_limit();
        let mut rows = Vec::with_capacity(doc.line_count());
        let mut line_starts = Vec::with_capacity(doc.line_count());
        let mut y = params.top_margin;

        for buffer_row in 0..doc.line_count() {
            line_starts.push(rows.len());
            let chars: Vec<char> = doc
                .line_text(buffer_row)
                .unwrap_or_default()
                .chars()
                .collect();

            let mut x = params.left_margin;
            let mut row = LayoutRow::new(buffer_row, y);
            let mut col = 0;
            while col < chars.len() {
                let len = if params.ligatures
                    && col + 1 < chars.len()
                    && is_ligature(chars[col], chars[col + 1])
                {
                    2
                } else {
                    1
                };
                let text: String = chars[col..col + len].iter().collect();
                let width = measure(metrics, &text);

                // Never wrap an empty visual row: a glyph wider than the
                // viewport gets a row of its own instead of an endless cascade.
                if x + width > limit && x > params.left_margin {
                    y += line_height;
                    x = params.left_margin;
                    let full = std::mem::replace(&mut row, LayoutRow::new(buffer_row, y));
                    rows.push(full);
                }

                row.glyphs.push(PlacedGlyph {
                    buffer_row,
                    buffer_col: col,
                    len,
                    text,
                    x,
                    y,
                    width,
                    kind: GlyphKind::Glyph,
                });
                x += width;
                col += len;
            }

            row.glyphs.push(PlacedGlyph {
                buffer_row,
                buffer_col: chars.len(),
                len: 0,
                text: String::new(),
                x,
                y,
                width: 0.0,
                kind: GlyphKind::LineEnd,
            });
            rows.push(row);
            y += line_height;
        }

        tracing::trace!(
            buffer_rows = line_starts.len(),
            visual_rows = rows.len(),
            viewport_width = params.viewport_width,
            "layout rebuilt"
        );

        Self {
            params,
            rows,
            line_starts,
            content_bottom: y,
        }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn rows(&self) -> &[LayoutRow] {
        &self.rows
    }

    /// Every entry in order, line ends included
    pub fn glyphs(&self) -> impl Iterator<Item = &PlacedGlyph> {
        self.rows.iter().flat_map(|row| row.glyphs.iter())
    }

    pub fn content_bottom(&self) -> f32 {
        self.content_bottom
    }

    /// Visual rows of one buffer row (empty slice if out of range)
    pub fn rows_for_line(&self, buffer_row: usize) -> &[LayoutRow] {
        let Some(&start) = self.line_starts.get(buffer_row) else {
            return &[];
        };
        let end = self
            .line_starts
            .get(buffer_row + 1)
            .copied()
            .unwrap_or(self.rows.len());
        &self.rows[start..end]
    }

    /// Last position of the document according to this layout
    pub fn end_position(&self) -> Position {
        self.rows
            .last()
            .and_then(|row| row.glyphs.last())
            .map(PlacedGlyph::position)
            .unwrap_or_default()
    }

    /// Buffer position under a point. Total for any input:
    ///
    /// 1. the glyph whose `[x, x+width) x [y, y+line_height)` holds the point
    /// 2. otherwise, in the visual row whose band holds `y`, the nearest
    ///    position on that row (past the end of a line means line end)
    /// 3. no band holds `y` (top margin, below all content, NaN): end of
    ///    the document
    pub fn hit_test(&self, x: f32, y: f32) -> Position {
        let line_height = self.params.line_height;
        match self.rows.iter().find(|r| r.contains_y(y, line_height)) {
            Some(row) => row.position_at_x(x),
            None => self.end_position(),
        }
    }

    /// Pixel of a buffer position, read back from the placed glyphs.
    ///
    /// Rows past the end use the last row, columns past the end of a line
    /// use its line end. A column between the two runes of a ligature sits
    /// proportionally inside the ligature.
    pub fn pixel_of(&self, row: usize, col: usize) -> Point {
        let row = row.min(self.line_starts.len().saturating_sub(1));
        let mut last = None;
        for glyph in self.rows_for_line(row).iter().flat_map(|r| r.glyphs.iter()) {
            if glyph.buffer_col == col {
                return Point::new(glyph.x, glyph.y);
            }
            if col > glyph.buffer_col && col < glyph.buffer_col + glyph.len {
                let fraction = (col - glyph.buffer_col) as f32 / glyph.len as f32;
                return Point::new(glyph.x + glyph.width * fraction, glyph.y);
            }
            last = Some(glyph);
        }
        last.map(|g| Point::new(g.x + g.width, g.y))
            .unwrap_or_else(|| Point::new(self.params.left_margin, self.params.top_margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono() -> MonospaceMetrics {
        MonospaceMetrics::new(10.0)
    }

    // wrap limit = 200 - 50 = 150
    fn params() -> LayoutParams {
        LayoutParams::new(200.0, 20.0)
    }

    fn layout(text: &str) -> Layout {
        Layout::build(&Document::with_text(text), &mono(), params())
    }

    fn visible_glyphs(layout: &Layout) -> Vec<&str> {
        layout
            .glyphs()
            .filter(|g| g.kind == GlyphKind::Glyph)
            .map(|g| g.text.as_str())
            .collect()
    }

    #[test]
    fn test_ligature_is_one_glyph() {
        let layout = layout("a->b");
        assert_eq!(visible_glyphs(&layout), vec!["a", "->", "b"]);

        let arrow = layout.glyphs().nth(1).unwrap();
        assert_eq!(arrow.buffer_col, 1);
        assert_eq!(arrow.len, 2);
        assert_eq!(arrow.x, 20.0);
        assert_eq!(arrow.width, 20.0);

        let b = layout.glyphs().nth(2).unwrap();
        assert_eq!(b.buffer_col, 3);
        assert_eq!(b.x, 40.0);
    }

    #[test]
    fn test_ligatures_can_be_disabled() {
        let doc = Document::with_text("a->b");
        let layout = Layout::build(&doc, &mono(), params().with_ligatures(false));
        assert_eq!(visible_glyphs(&layout), vec!["a", "-", ">", "b"]);
    }

    #[test]
    fn test_ligature_pairs_greedily() {
        // "--->" pairs as "--", "->"
        let layout = layout("--->");
        assert_eq!(visible_glyphs(&layout), vec!["--", "->"]);
    }

    #[test]
    fn test_line_end_entry_on_every_row() {
        let layout = layout("ab\n\ncd");
        let ends: Vec<_> = layout
            .glyphs()
            .filter(|g| g.kind == GlyphKind::LineEnd)
            .map(|g| (g.buffer_row, g.buffer_col, g.x, g.y))
            .collect();
        assert_eq!(
            ends,
            vec![(0, 2, 30.0, 10.0), (1, 0, 10.0, 30.0), (2, 2, 30.0, 50.0)]
        );
    }

    #[test]
    fn test_greedy_wrap() {
        let layout = layout(&"x".repeat(20));
        assert_eq!(layout.rows().len(), 2);

        let first = &layout.rows()[0];
        assert_eq!(first.glyphs.len(), 14);
        assert_eq!(first.glyphs.last().unwrap().x, 140.0);

        let second = &layout.rows()[1];
        assert_eq!(second.y, 30.0);
        assert_eq!(second.glyphs[0].buffer_col, 14);
        assert_eq!(second.glyphs[0].x, 10.0);
        assert_eq!(second.glyphs.last().unwrap().kind, GlyphKind::LineEnd);
        assert_eq!(second.glyphs.last().unwrap().x, 70.0);
    }

    #[test]
    fn test_next_buffer_row_follows_last_wrapped_row() {
        let layout = layout(&format!("{}\nend", "x".repeat(20)));
        assert_eq!(layout.rows_for_line(1)[0].y, 50.0);
        assert_eq!(layout.content_bottom(), 70.0);
    }

    #[test]
    fn test_oversized_glyph_gets_its_own_row() {
        let wide = |text: &str| if text == "W" { 500.0 } else { 10.0 };
        let layout = Layout::build(&Document::with_text("W"), &wide, params());
        assert_eq!(layout.rows().len(), 1);
        assert_eq!(layout.rows()[0].glyphs[0].x, 10.0);
    }

    #[test]
    fn test_tab_measured_as_four_spaces() {
        let layout = layout("\tx");
        let x = layout.glyphs().nth(1).unwrap();
        assert_eq!(x.x, 50.0);
    }

    #[test]
    fn test_variable_width_oracle() {
        let oracle = |text: &str| if text == "m" { 16.0 } else { 6.0 };
        let layout = Layout::build(&Document::with_text("mim"), &oracle, params());
        let xs: Vec<f32> = layout.glyphs().map(|g| g.x).collect();
        assert_eq!(xs, vec![10.0, 26.0, 32.0, 48.0]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let doc = Document::with_text("fn main() -> u8 {\n    a != b && c\n}");
        let a = Layout::build(&doc, &mono(), params());
        let b = Layout::build(&doc, &mono(), params());
        assert_eq!(a, b);
    }

    #[test]
    fn test_hit_test_on_glyphs() {
        let layout = layout("a->b");
        assert_eq!(layout.hit_test(15.0, 15.0), Position::new(0, 0));
        assert_eq!(layout.hit_test(25.0, 15.0), Position::new(0, 1));
        assert_eq!(layout.hit_test(39.9, 29.9), Position::new(0, 1));
        assert_eq!(layout.hit_test(45.0, 15.0), Position::new(0, 3));
    }

    #[test]
    fn test_hit_test_past_end_of_line() {
        let layout = layout("ab\ncdef");
        assert_eq!(layout.hit_test(180.0, 15.0), Position::new(0, 2));
        assert_eq!(layout.hit_test(50.0, 35.0), Position::new(1, 4));
    }

    #[test]
    fn test_hit_test_empty_line() {
        let layout = layout("ab\n\ncd");
        assert_eq!(layout.hit_test(100.0, 35.0), Position::new(1, 0));
        assert_eq!(layout.hit_test(3.0, 35.0), Position::new(1, 0));
    }

    #[test]
    fn test_hit_test_wrapped_rows() {
        let layout = layout(&format!("{}\nend", "x".repeat(20)));
        // right of the first visual row: its last glyph, same visual row
        assert_eq!(layout.hit_test(155.0, 15.0), Position::new(0, 13));
        let p = layout.pixel_of(0, 13);
        assert_eq!((p.x, p.y), (140.0, 10.0));
        assert_eq!(layout.hit_test(65.0, 35.0), Position::new(0, 19));
        assert_eq!(layout.hit_test(100.0, 35.0), Position::new(0, 20));
        assert_eq!(layout.hit_test(15.0, 55.0), Position::new(1, 0));
    }

    #[test]
    fn test_hit_test_is_total() {
        let layout = layout("ab\ncd");
        assert_eq!(layout.hit_test(-50.0, 15.0), Position::new(0, 0));
        assert_eq!(layout.hit_test(25.0, -100.0), Position::new(1, 2));
        assert_eq!(layout.hit_test(25.0, 5.0), Position::new(1, 2));
        assert_eq!(layout.hit_test(5.0, 5000.0), Position::new(1, 2));
        assert_eq!(layout.hit_test(f32::NAN, f32::NAN), Position::new(1, 2));
        assert_eq!(
            layout.hit_test(f32::INFINITY, f32::NEG_INFINITY),
            Position::new(1, 2)
        );
        assert_eq!(layout.hit_test(f32::INFINITY, 15.0), Position::new(0, 2));
    }

    #[test]
    fn test_pixel_of_reads_layout_table() {
        let layout = layout(&format!("{}\nend", "x".repeat(20)));
        assert_eq!(layout.pixel_of(0, 0), Point::new(10.0, 10.0));
        assert_eq!(layout.pixel_of(0, 14), Point::new(10.0, 30.0));
        assert_eq!(layout.pixel_of(0, 20), Point::new(70.0, 30.0));
        assert_eq!(layout.pixel_of(1, 3), Point::new(40.0, 50.0));
    }

    #[test]
    fn test_pixel_of_clamps() {
        let layout = layout("ab\ncd");
        assert_eq!(layout.pixel_of(0, 99), Point::new(30.0, 10.0));
        assert_eq!(layout.pixel_of(9, 0), Point::new(10.0, 30.0));
    }

    #[test]
    fn test_pixel_of_inside_ligature() {
        let layout = layout("a->b");
        assert_eq!(layout.pixel_of(0, 2), Point::new(30.0, 10.0));
    }

    #[test]
    fn test_hit_test_inverts_pixel_of() {
        let layout = layout("let x = a->b;\n\n    if a != b {}\n");
        for glyph in layout.glyphs() {
            let p = layout.pixel_of(glyph.buffer_row, glyph.buffer_col);
            assert_eq!(layout.hit_test(p.x, p.y), glyph.position());
        }
    }
}
