//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! cursor, selection and layout issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=debug,message=debug` - scoped filtering
//! - `RUST_LOG=runepad::layout=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/runepad/logs/runepad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::session::EditorSession;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so
/// dumps on stdout stay machine-readable.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "runepad.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of cursor/selection state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct CursorSnapshot {
    pub cursor_count: usize,
    pub primary: usize,
    pub cursors: Vec<CursorInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorInfo {
    pub row: usize,
    pub col: usize,
    pub start: (usize, usize),
    pub end: (usize, usize),
    pub selecting: bool,
}

impl CursorSnapshot {
    pub fn from_session(session: &EditorSession) -> Self {
        let cursors = session.cursors();
        Self {
            cursor_count: cursors.len(),
            primary: cursors.primary_index(),
            cursors: cursors
                .cursors()
                .iter()
                .map(|c| CursorInfo {
                    row: c.row,
                    col: c.col,
                    start: (c.selection.start.row, c.selection.start.col),
                    end: (c.selection.end.row, c.selection.end.col),
                    selecting: c.selection.has_content(),
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        if self.cursor_count != other.cursor_count {
            return Some(format!(
                "cursor count: {} → {}",
                self.cursor_count, other.cursor_count
            ));
        }

        let mut changes = Vec::new();
        for (i, (before, after)) in self.cursors.iter().zip(&other.cursors).enumerate() {
            if before.row != after.row || before.col != after.col {
                changes.push(format!(
                    "#{}: ({},{}) → ({},{})",
                    i, before.row, before.col, after.row, after.col
                ));
            }
            if before.selecting != after.selecting {
                let status = if after.selecting { "active" } else { "cleared" };
                changes.push(format!("#{}: selection {}", i, status));
            } else if after.selecting && before.end != after.end {
                changes.push(format!(
                    "#{}: selection {:?}..{:?}",
                    i, after.start, after.end
                ));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
