//! Replay scripts: YAML lists of editor inputs
//!
//! Lets the headless binary and the tests drive a session the way a window
//! would, one message at a time.
//!
//! ```yaml
//! steps:
//!   - command: type
//!     text: "let x = 1;"
//!   - command: move_left
//!     repeat: 3
//!   - command: click
//!     x: 40.0
//!     y: 20.0
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::messages::{Direction, DocumentMsg, EditorMsg, Msg, ViewMsg};
use crate::session::EditorSession;
use crate::update::update;

/// Upper bound on animation frames run after one step
const MAX_SETTLE_TICKS: usize = 10_000;

/// Root structure of a script YAML file
#[derive(Debug, Deserialize)]
pub struct ScriptConfig {
    pub steps: Vec<StepConfig>,
}

/// A single step entry from YAML
#[derive(Debug, Default, Deserialize)]
pub struct StepConfig {
    pub command: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub row: Option<usize>,
    #[serde(default)]
    pub col: Option<usize>,
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    /// Wheel notches for `scroll`
    #[serde(default)]
    pub amount: Option<f32>,
    /// Run the step this many times
    #[serde(default)]
    pub repeat: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptError {
    IoError(String),
    ParseError(String),
    InvalidCommand(String),
    MissingField {
        command: String,
        field: &'static str,
    },
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::IoError(e) => write!(f, "IO error: {}", e),
            ScriptError::ParseError(e) => write!(f, "Parse error: {}", e),
            ScriptError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
            ScriptError::MissingField { command, field } => {
                write!(f, "Command '{}' needs '{}'", command, field)
            }
        }
    }
}

impl std::error::Error for ScriptError {}

/// Load a script from a YAML file
pub fn load_script_file(path: &Path) -> Result<Vec<Msg>, ScriptError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScriptError::IoError(e.to_string()))?;

    parse_script_yaml(&content)
}

/// Parse a script from a YAML string into the messages it sends
pub fn parse_script_yaml(yaml: &str) -> Result<Vec<Msg>, ScriptError> {
    let config: ScriptConfig =
        serde_yaml::from_str(yaml).map_err(|e| ScriptError::ParseError(e.to_string()))?;

    let mut messages = Vec::new();
    for step in &config.steps {
        let msgs = step.to_messages()?;
        for _ in 0..step.repeat.unwrap_or(1) {
            messages.extend(msgs.iter().cloned());
        }
    }
    Ok(messages)
}

fn parse_direction(s: &str) -> Option<Direction> {
    match s {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}

impl StepConfig {
    fn missing(&self, field: &'static str) -> ScriptError {
        ScriptError::MissingField {
            command: self.command.clone(),
            field,
        }
    }

    fn text(&self) -> Result<String, ScriptError> {
        self.text.clone().ok_or_else(|| self.missing("text"))
    }

    fn row_col(&self) -> Result<(usize, usize), ScriptError> {
        let row = self.row.ok_or_else(|| self.missing("row"))?;
        let col = self.col.ok_or_else(|| self.missing("col"))?;
        Ok((row, col))
    }

    fn point(&self) -> Result<(f32, f32), ScriptError> {
        let x = self.x.ok_or_else(|| self.missing("x"))?;
        let y = self.y.ok_or_else(|| self.missing("y"))?;
        Ok((x, y))
    }

    /// Messages for one run of this step
    pub fn to_messages(&self) -> Result<Vec<Msg>, ScriptError> {
        let command = self.command.as_str();

        if let Some(dir) = command.strip_prefix("move_").and_then(parse_direction) {
            return Ok(vec![EditorMsg::MoveCursor(dir).into()]);
        }
        if let Some(dir) = command.strip_prefix("select_").and_then(parse_direction) {
            return Ok(vec![EditorMsg::MoveCursorWithSelection(dir).into()]);
        }

        let msg: Msg = match command {
            // Editing
            "type" | "insert" => DocumentMsg::InsertText(self.text()?).into(),
            "paste" => DocumentMsg::Paste(self.text()?).into(),
            "backspace" => DocumentMsg::DeleteBackward.into(),
            "enter" => DocumentMsg::InsertNewline.into(),
            "tab" => DocumentMsg::InsertTab.into(),
            "undo" => DocumentMsg::Undo.into(),

            // Cursor and selection
            "line_start" => EditorMsg::MoveCursorLineStart.into(),
            "line_end" => EditorMsg::MoveCursorLineEnd.into(),
            "select_all" => EditorMsg::SelectAll.into(),
            "clear_selection" => EditorMsg::ClearSelection.into(),
            "cursor" => {
                let (row, col) = self.row_col()?;
                EditorMsg::SetCursorPosition { row, col }.into()
            }
            "anchor" => {
                let (row, col) = self.row_col()?;
                EditorMsg::SetSelectionAnchor { row, col }.into()
            }
            "extend" => {
                let (row, col) = self.row_col()?;
                EditorMsg::ExtendSelectionTo { row, col }.into()
            }

            // Pointer
            "click" => {
                let (x, y) = self.point()?;
                return Ok(vec![
                    EditorMsg::PointerDown { x, y }.into(),
                    EditorMsg::PointerUp { x, y }.into(),
                ]);
            }
            "press" => {
                let (x, y) = self.point()?;
                EditorMsg::PointerDown { x, y }.into()
            }
            "drag" => {
                let (x, y) = self.point()?;
                EditorMsg::PointerDrag { x, y }.into()
            }
            "release" => {
                let (x, y) = self.point()?;
                EditorMsg::PointerUp { x, y }.into()
            }

            // Viewport
            "scroll" => ViewMsg::Scroll(self.amount.ok_or_else(|| self.missing("amount"))?).into(),
            "tick" => ViewMsg::Tick.into(),
            "resize" => {
                let width = self.width.ok_or_else(|| self.missing("width"))?;
                let height = self.height.ok_or_else(|| self.missing("height"))?;
                ViewMsg::Resize { width, height }.into()
            }
            "zoom_in" => ViewMsg::ZoomIn.into(),
            "zoom_out" => ViewMsg::ZoomOut.into(),

            _ => return Err(ScriptError::InvalidCommand(self.command.clone())),
        };
        Ok(vec![msg])
    }
}

/// Apply `messages` in order. Scroll animations are run to completion
/// after each message so every step sees a settled viewport.
pub fn run_script(session: &mut EditorSession, messages: Vec<Msg>) {
    for msg in messages {
        let mut cmd = update(session, msg);
        let mut ticks = 0;
        while cmd.as_ref().is_some_and(|c| c.wants_tick()) && ticks < MAX_SETTLE_TICKS {
            cmd = update(session, ViewMsg::Tick.into());
            ticks += 1;
        }
        if ticks > 0 {
            tracing::trace!(ticks, "scroll settled");
        }
    }
}
