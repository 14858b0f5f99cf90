//! runepad - rune-exact text editing engine
//!
//! A line buffer addressed by (row, rune column), undo snapshots, cursors
//! with selections, and a wrapped, ligature-aware layout that is the single
//! mapping between buffer positions and pixels. Input arrives as messages
//! and is applied by [`update::update`], Elm style.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod debug_dump;
pub mod editable;
pub mod layout;
pub mod messages;
pub mod script;
pub mod session;
pub mod startup;
pub mod tracing;
pub mod update;
pub mod viewport;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use editable::{Document, Position};
pub use layout::{GlyphMetrics, Layout};
pub use messages::Msg;
pub use session::EditorSession;
