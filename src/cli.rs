//! Command-line argument parsing for the headless editor
//!
//! Supports:
//! - Editing a file, or the scratch buffer when no path is given
//! - Overriding viewport size and zoom
//! - Replaying a YAML input script
//! - Dumping the resulting layout, state or text

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Rune-exact text editing engine, driven headless
#[derive(Parser, Debug)]
#[command(name = "runepad", version, about = "Rune-exact text editing engine")]
pub struct CliArgs {
    /// File to edit (default: the scratch buffer)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Viewport width in renderer pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<f32>,

    /// Viewport height in renderer pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<f32>,

    /// Zoom factor (overrides the config file)
    #[arg(long)]
    pub zoom: Option<f32>,

    /// YAML script of inputs to replay
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Print a JSON dump after the script ran
    #[arg(long, value_enum)]
    pub dump: Option<DumpKind>,

    /// Hit-test a renderer pixel and print the buffer position
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub hit: Option<Vec<f32>>,

    /// Never write the scratch buffer back on exit
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpKind {
    /// Placed glyphs, row by row
    Layout,
    /// Cursors, selections, history and viewport
    State,
    /// The document text
    Text,
}

/// Where the initial content comes from
#[derive(Debug, Clone, PartialEq)]
pub enum StartupMode {
    /// The file given on the command line; never saved back
    File(PathBuf),
    /// The scratch buffer in the working directory
    Scratch,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    pub width: f32,
    pub height: f32,
    pub zoom: Option<f32>,
    pub script: Option<PathBuf>,
    pub dump: Option<DumpKind>,
    pub hit: Option<(f32, f32)>,
    /// Write the content back to the scratch buffer on exit
    pub save_on_exit: bool,
}

pub const DEFAULT_WIDTH: f32 = 800.0;
pub const DEFAULT_HEIGHT: f32 = 600.0;

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let width = self.width.unwrap_or(DEFAULT_WIDTH);
        let height = self.height.unwrap_or(DEFAULT_HEIGHT);
        if !(width > 0.0 && height > 0.0) {
            return Err(format!("Invalid viewport size {}x{}", width, height));
        }
        if let Some(zoom) = self.zoom {
            if !(zoom > 0.0) {
                return Err(format!("Invalid zoom {}", zoom));
            }
        }

        let hit = match self.hit.as_deref() {
            None => None,
            Some([x, y]) => Some((*x, *y)),
            Some(other) => return Err(format!("--hit takes X and Y, got {:?}", other)),
        };

        let mode = match self.path {
            Some(path) => StartupMode::File(path),
            None => StartupMode::Scratch,
        };
        let save_on_exit = mode == StartupMode::Scratch && !self.no_save;

        Ok(StartupConfig {
            mode,
            width,
            height,
            zoom: self.zoom,
            script: self.script,
            dump: self.dump,
            hit,
            save_on_exit,
        })
    }
}
