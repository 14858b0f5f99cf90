//! Initial content loading and the scratch buffer
//!
//! The engine only ever sees a string. This module decides which string:
//! the file named on the command line, else the scratch buffer, else a
//! greeting. The scratch buffer is written back when the session ends.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::StartupMode;

/// Scratch buffer, relative to the working directory
pub const SCRATCH_FILE: &str = "buffer.txt";

/// Shown when there is no scratch buffer yet
pub const GREETING: &str = "Hello, High-DPI World!\nasdadasda";

/// Read the initial content for `mode`.
///
/// A file named on the command line must be readable. A missing or
/// unreadable scratch buffer falls back to [`GREETING`].
pub fn load_initial_content(mode: &StartupMode, dir: &Path) -> Result<String> {
    match mode {
        StartupMode::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        StartupMode::Scratch => {
            let path = scratch_path(dir);
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    tracing::info!("Loaded scratch buffer from {}", path.display());
                    Ok(content)
                }
                Err(e) => {
                    tracing::debug!("No scratch buffer at {}: {}", path.display(), e);
                    Ok(GREETING.to_string())
                }
            }
        }
    }
}

pub fn scratch_path(dir: &Path) -> PathBuf {
    dir.join(SCRATCH_FILE)
}

/// Write `content` to the scratch buffer in `dir`
pub fn save_scratch(dir: &Path, content: &str) -> Result<PathBuf> {
    let path = scratch_path(dir);
    std::fs::write(&path, content).with_context(|| format!("saving {}", path.display()))?;
    tracing::info!("Saved scratch buffer to {}", path.display());
    Ok(path)
}
