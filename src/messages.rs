//! Message types for the Elm-style architecture
//!
//! Every input the host layer forwards (keys, text, pointer, wheel, window
//! changes) arrives as one of these and is applied by [`crate::update::update`].

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Cursor and selection messages
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    /// Move the primary cursor (arrow keys). Clears selections.
    MoveCursor(Direction),
    /// Move while extending the primary selection (Shift+Arrow)
    MoveCursorWithSelection(Direction),
    /// Home
    MoveCursorLineStart,
    /// End / Ctrl+E
    MoveCursorLineEnd,
    /// Jump to a buffer position, dropping selections
    SetCursorPosition { row: usize, col: usize },
    /// Anchor a selection at a buffer position and put the cursor there
    SetSelectionAnchor { row: usize, col: usize },
    /// Move the selection's free end and the cursor
    ExtendSelectionTo { row: usize, col: usize },
    /// Deactivate all selections, keep positions
    ClearSelection,
    /// Cmd+A
    SelectAll,

    // === Pointer (layout coordinates, before scroll) ===
    /// Button pressed: place cursor and start a selection
    PointerDown { x: f32, y: f32 },
    /// Moved with the button held
    PointerDrag { x: f32, y: f32 },
    /// Button released; an empty drag clears the selection
    PointerUp { x: f32, y: f32 },
}

/// Text editing messages
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentMsg {
    /// Composed text input (already IME-processed)
    InsertText(String),
    /// Backspace
    DeleteBackward,
    /// Return
    InsertNewline,
    /// Tab, inserts spaces
    InsertTab,
    /// Clipboard paste
    Paste(String),
    /// Restore the last snapshot
    Undo,
}

/// Viewport messages
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMsg {
    /// Wheel notches, positive scrolls down
    Scroll(f32),
    /// One animation frame
    Tick,
    /// Renderer size changed
    Resize { width: f32, height: f32 },
    ZoomIn,
    ZoomOut,
}

/// Top-level message
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Editor(EditorMsg),
    Document(DocumentMsg),
    View(ViewMsg),
}

impl From<EditorMsg> for Msg {
    fn from(msg: EditorMsg) -> Self {
        Msg::Editor(msg)
    }
}

impl From<DocumentMsg> for Msg {
    fn from(msg: DocumentMsg) -> Self {
        Msg::Document(msg)
    }
}

impl From<ViewMsg> for Msg {
    fn from(msg: ViewMsg) -> Self {
        Msg::View(msg)
    }
}
