//! The editing session: one document, its undo history, its cursors, the
//! viewport and the layout built from them.
//!
//! Everything the host layer can do to the editor goes through an
//! [`EditorSession`]. There is no other state. Edits never fail: positions
//! out of range are clamped or turn the operation into a no-op, and the
//! session stays valid whatever it is fed.

use crate::config::EditorConfig;
use crate::editable::{CursorManager, Document, Point, Position, UndoHistory};
use crate::layout::{GlyphMetrics, Layout, MonospaceMetrics};
use crate::messages::Direction;
use crate::viewport::ViewState;

/// A built layout and the document revision it was built from
#[derive(Debug)]
struct CachedLayout {
    revision: u64,
    layout: Layout,
}

pub struct EditorSession {
    document: Document,
    history: UndoHistory,
    cursors: CursorManager,
    view: ViewState,
    tab_size: usize,
    /// Bumped on every content change
    revision: u64,
    layout: Option<CachedLayout>,
    /// Injected glyph widths. None measures with a monospace advance
    /// derived from the current font size.
    metrics: Option<Box<dyn GlyphMetrics>>,
    /// Pointer button held since the last `pointer_down`
    dragging: bool,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("document", &self.document)
            .field("history", &self.history)
            .field("cursors", &self.cursors)
            .field("view", &self.view)
            .field("revision", &self.revision)
            .field("custom_metrics", &self.metrics.is_some())
            .finish()
    }
}

impl EditorSession {
    pub fn new(text: &str) -> Self {
        Self::with_config(text, &EditorConfig::default(), 800.0, 600.0)
    }

    pub fn with_config(text: &str, config: &EditorConfig, width: f32, height: f32) -> Self {
        Self {
            document: Document::with_text(text),
            history: UndoHistory::with_capacity(config.undo_capacity),
            cursors: CursorManager::new(),
            view: ViewState::from_config(config, width, height),
            tab_size: config.tab_size,
            revision: 0,
            layout: None,
            metrics: None,
            dragging: false,
        }
    }

    /// Measure glyphs with `metrics` from now on
    pub fn set_metrics(&mut self, metrics: Box<dyn GlyphMetrics>) {
        self.metrics = Some(metrics);
        self.invalidate_layout();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn text(&self) -> String {
        self.document.content()
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn cursors(&self) -> &CursorManager {
        &self.cursors
    }

    pub fn cursor_position(&self) -> Position {
        self.cursors.primary().to_position()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn has_selection(&self) -> bool {
        self.cursors.has_selection()
    }

    /// Text under the primary selection, empty if there is none
    pub fn selected_text(&self) -> String {
        let selection = self.cursors.primary().selection;
        if !selection.has_content() {
            return String::new();
        }
        selection.extract_text(&self.document)
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Run a content edit. The pre-edit content becomes an undo snapshot
    /// only if the edit reports a change.
    fn edit(&mut self, apply: impl FnOnce(&mut Self) -> bool) -> bool {
        let before = self.document.content();
        if !apply(self) {
            return false;
        }
        self.history.push(before);
        self.revision = self.revision.wrapping_add(1);
        self.cursors.clamp_to(&self.document);
        true
    }

    /// Delete the primary selection's text and put the cursor at its start.
    /// Not recorded in history; callers wrap it in `edit`.
    fn remove_selection(&mut self) -> bool {
        let selection = self.cursors.primary().selection;
        if !selection.has_content() {
            return false;
        }
        let (start, end) = selection.normalized();
        let changed = self.document.delete_range(start, end);
        let cursor = self.cursors.primary_mut();
        cursor.set_position(self.document.clamp_position(start));
        cursor.selection.clear();
        changed
    }

    fn insert_at_cursor(&mut self, text: &str) -> bool {
        let removed = self.remove_selection();
        let pos = self.cursor_position();
        let Some(end) = self.document.insert_at(pos.row, pos.col, text) else {
            return removed;
        };
        let cursor = self.cursors.primary_mut();
        cursor.set_position(end);
        cursor.selection.clear();
        removed || !text.is_empty()
    }

    /// Insert composed text at the cursor, replacing any selection
    pub fn apply_text_input(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.edit(|s| s.insert_at_cursor(text))
    }

    /// Delete the selection if there is one, else the rune before the
    /// cursor (joining with the previous row at column 0)
    pub fn apply_backspace(&mut self) -> bool {
        self.edit(|s| {
            if s.remove_selection() {
                return true;
            }
            let pos = s.cursor_position();
            match s.document.delete_char_before(pos.row, pos.col) {
                Some(new_pos) => {
                    s.cursors.primary_mut().set_position(new_pos);
                    true
                }
                None => false,
            }
        })
    }

    /// Split the row at the cursor
    pub fn apply_enter(&mut self) -> bool {
        self.edit(|s| s.insert_at_cursor("\n"))
    }

    /// Insert `tab_size` spaces
    pub fn apply_tab(&mut self) -> bool {
        let spaces = " ".repeat(self.tab_size);
        self.apply_text_input(&spaces)
    }

    /// Clipboard text, inserted like typed input
    pub fn paste(&mut self, text: &str) -> bool {
        self.apply_text_input(text)
    }

    /// Remove the primary selection's text. No-op without a selection.
    pub fn delete_selection(&mut self) -> bool {
        self.edit(|s| s.remove_selection())
    }

    /// Restore the last snapshot. Returns false if there was nothing to undo.
    ///
    /// Cursors and selections are clamped into the restored text but
    /// otherwise stay where they were.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            tracing::debug!("nothing to undo");
            return false;
        };
        self.document.set_content(&snapshot);
        self.revision = self.revision.wrapping_add(1);
        self.cursors.clamp_to(&self.document);
        self.dragging = false;
        true
    }

    // =========================================================================
    // Cursor movement
    // =========================================================================

    /// Where one step in `direction` lands from `pos`.
    ///
    /// Horizontal steps stop at the ends of the row. Vertical steps keep the
    /// column when the target row is long enough and clamp to its end
    /// otherwise.
    fn step(&self, pos: Position, direction: Direction) -> Position {
        let doc = &self.document;
        match direction {
            Direction::Left => Position::new(pos.row, pos.col.saturating_sub(1)),
            Direction::Right => {
                Position::new(pos.row, (pos.col + 1).min(doc.line_length(pos.row)))
            }
            Direction::Up if pos.row > 0 => {
                Position::new(pos.row - 1, pos.col.min(doc.line_length(pos.row - 1)))
            }
            Direction::Down if pos.row + 1 < doc.line_count() => {
                Position::new(pos.row + 1, pos.col.min(doc.line_length(pos.row + 1)))
            }
            Direction::Up | Direction::Down => pos,
        }
    }

    /// Arrow key: move the primary cursor and drop all selections
    pub fn move_cursor(&mut self, direction: Direction) {
        let next = self.step(self.cursor_position(), direction);
        self.cursors.clear_all_selections();
        self.cursors.primary_mut().set_position(next);
    }

    /// Shift+Arrow: move and extend the primary selection
    pub fn move_cursor_with_selection(&mut self, direction: Direction) {
        let pos = self.cursor_position();
        let next = self.step(pos, direction);
        let cursor = self.cursors.primary_mut();
        if !cursor.selection.active {
            cursor.selection.start_at(pos);
        }
        cursor.selection.extend_to(next);
        cursor.set_position(next);
    }

    pub fn move_cursor_line_start(&mut self) {
        let row = self.cursor_position().row;
        self.cursors.clear_all_selections();
        self.cursors.primary_mut().set_position(Position::new(row, 0));
    }

    pub fn move_cursor_line_end(&mut self) {
        let row = self.cursor_position().row;
        let end = self.document.line_length(row);
        self.cursors.clear_all_selections();
        self.cursors.primary_mut().set_position(Position::new(row, end));
    }

    /// Put the primary cursor at `(row, col)`, clamped, and drop selections
    pub fn set_cursor_position(&mut self, row: usize, col: usize) {
        let pos = self.document.clamp_position(Position::new(row, col));
        self.cursors.clear_all_selections();
        self.cursors.primary_mut().set_position(pos);
    }

    /// Anchor a new selection at `(row, col)` and move the cursor there
    pub fn set_selection_anchor(&mut self, row: usize, col: usize) {
        let pos = self.document.clamp_position(Position::new(row, col));
        let cursor = self.cursors.primary_mut();
        cursor.set_position(pos);
        cursor.selection.start_at(pos);
    }

    /// Move the selection's free end and the cursor to `(row, col)`.
    /// Anchors at the cursor first if no selection is active.
    pub fn extend_selection_to(&mut self, row: usize, col: usize) {
        let pos = self.document.clamp_position(Position::new(row, col));
        let cursor = self.cursors.primary_mut();
        if !cursor.selection.active {
            let anchor = cursor.to_position();
            cursor.selection.start_at(anchor);
        }
        cursor.selection.extend_to(pos);
        cursor.set_position(pos);
    }

    pub fn clear_selection(&mut self) {
        self.cursors.clear_all_selections();
    }

    /// Select the whole document, cursor at the end
    pub fn select_all(&mut self) {
        let end = self.document.end_position();
        self.cursors.collapse_to_primary();
        let cursor = self.cursors.primary_mut();
        cursor.selection.start_at(Position::zero());
        cursor.selection.extend_to(end);
        cursor.set_position(end);
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    /// Button down at a renderer pixel: place the cursor, anchor a selection
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let pos = self.hit_test(x, y);
        self.cursors.clear_all_selections();
        let cursor = self.cursors.primary_mut();
        cursor.set_position(pos);
        cursor.selection.start_at(pos);
        self.dragging = true;
    }

    /// Pointer moved with the button held. Ignored when not dragging.
    pub fn pointer_drag(&mut self, x: f32, y: f32) -> bool {
        if !self.dragging {
            return false;
        }
        let pos = self.hit_test(x, y);
        let cursor = self.cursors.primary_mut();
        cursor.selection.extend_to(pos);
        cursor.set_position(pos);
        true
    }

    /// Button released. A click without drag distance leaves no selection.
    pub fn pointer_up(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        self.pointer_drag(x, y);
        self.dragging = false;
        let selection = &mut self.cursors.primary_mut().selection;
        if selection.is_empty() {
            selection.clear();
        }
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Drop the cached layout; the next query rebuilds it
    pub fn invalidate_layout(&mut self) {
        self.layout = None;
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
        self.invalidate_layout();
    }

    pub fn zoom_out(&mut self) -> bool {
        let changed = self.view.zoom_out();
        if changed {
            self.invalidate_layout();
        }
        changed
    }

    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let changed = self.view.resize(width, height);
        if changed {
            self.invalidate_layout();
        }
        changed
    }

    /// Wheel input in notches. Returns true if an animation is now running.
    pub fn scroll(&mut self, notches: f32) -> bool {
        self.view.scroll.scroll_by(notches);
        self.view.scroll.is_animating()
    }

    /// One animation frame. Returns true while the offset is still moving.
    pub fn tick(&mut self) -> bool {
        self.view.scroll.tick()
    }

    /// Current whole-pixel scroll offset
    pub fn scroll_offset(&self) -> f32 {
        self.view.scroll.offset()
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Layout for a caller-supplied width, oracle and line height.
    ///
    /// Always built from `metrics`: the session cannot tell two oracles
    /// apart, so a cached table is never handed out here. The result stays
    /// cached for hit-testing and pixel lookups until the next edit.
    pub fn get_layout<M: GlyphMetrics + ?Sized>(
        &mut self,
        viewport_width: f32,
        metrics: &M,
        line_height: f32,
    ) -> &Layout {
        let mut params = self.view.layout_params();
        params.viewport_width = viewport_width;
        params.line_height = line_height;
        let document = &self.document;
        let revision = self.revision;
        refresh_layout(&mut self.layout, &mut self.cursors, false, || CachedLayout {
            revision,
            layout: Layout::build(document, metrics, params),
        })
    }

    /// The layout hit-testing and pixel lookups read.
    ///
    /// Whatever was built last is reused while the document is unchanged,
    /// so queries agree with the table the host drew. Otherwise it is
    /// rebuilt from the session's own oracle and viewport parameters.
    pub fn layout(&mut self) -> &Layout {
        let fresh = self
            .layout
            .as_ref()
            .is_some_and(|c| c.revision == self.revision);
        let params = self.view.layout_params();
        let font_size = self.view.font_size() as f32;
        let document = &self.document;
        let metrics = &self.metrics;
        let revision = self.revision;
        refresh_layout(&mut self.layout, &mut self.cursors, fresh, || {
            let layout = match metrics {
                Some(metrics) => Layout::build(document, metrics.as_ref(), params),
                None => Layout::build(document, &MonospaceMetrics::for_font_size(font_size), params),
            };
            CachedLayout { revision, layout }
        })
    }

    /// Buffer position under a renderer pixel, scroll applied. Total.
    pub fn hit_test(&mut self, x: f32, y: f32) -> Position {
        let offset = self.scroll_offset();
        self.layout().hit_test(x, y + offset)
    }

    /// Renderer pixel of a buffer position, scroll applied
    pub fn pixel_of(&mut self, row: usize, col: usize) -> Point {
        let offset = self.scroll_offset();
        let p = self.layout().pixel_of(row, col);
        Point::new(p.x, p.y - offset)
    }

    /// Pixel of the primary cursor, scroll applied
    pub fn cursor_pixel(&mut self) -> Point {
        let pos = self.cursor_position();
        self.pixel_of(pos.row, pos.col)
    }

    // =========================================================================
    // Invariants
    // =========================================================================

    /// Panics if any cursor or selection endpoint is outside the document
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        assert!(!self.cursors.is_empty(), "cursor set is empty");
        assert!(
            self.cursors.primary_index() < self.cursors.len(),
            "primary index {} out of range ({} cursors)",
            self.cursors.primary_index(),
            self.cursors.len()
        );
        let valid = |p: Position| self.document.clamp_position(p) == p;
        for (i, cursor) in self.cursors.cursors().iter().enumerate() {
            assert!(
                valid(cursor.to_position()),
                "cursor #{} at {:?} is outside the document",
                i,
                cursor.to_position()
            );
            assert!(
                valid(cursor.selection.start) && valid(cursor.selection.end),
                "selection #{} {:?} is outside the document",
                i,
                cursor.selection
            );
        }
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants(&self) {}
}

/// Keep `slot` if `reuse`, else fill it from `build`, then re-anchor
/// every cursor on the result.
fn refresh_layout<'a>(
    slot: &'a mut Option<CachedLayout>,
    cursors: &mut CursorManager,
    reuse: bool,
    build: impl FnOnce() -> CachedLayout,
) -> &'a Layout {
    let cached = match slot.take() {
        Some(cached) if reuse => cached,
        _ => build(),
    };
    let cached = slot.insert(cached);
    for cursor in cursors.iter_mut() {
        cursor.anchor = Some(cached.layout.pixel_of(cursor.row, cursor.col));
    }
    &cached.layout
}
