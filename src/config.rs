//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/runepad/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::DEFAULT_UNDO_CAPACITY;
use crate::layout::{DEFAULT_LEFT_MARGIN, DEFAULT_RIGHT_MARGIN, DEFAULT_TOP_MARGIN};

/// Pixel margins around the text area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    #[serde(default = "default_left_margin")]
    pub left: f32,
    #[serde(default = "default_top_margin")]
    pub top: f32,
    #[serde(default = "default_right_margin")]
    pub right: f32,
}

fn default_left_margin() -> f32 {
    DEFAULT_LEFT_MARGIN
}

fn default_top_margin() -> f32 {
    DEFAULT_TOP_MARGIN
}

fn default_right_margin() -> f32 {
    DEFAULT_RIGHT_MARGIN
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT_MARGIN,
            top: DEFAULT_TOP_MARGIN,
            right: DEFAULT_RIGHT_MARGIN,
        }
    }
}

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Font size in points before zoom
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Initial zoom factor
    #[serde(default = "default_zoom")]
    pub zoom: f32,

    /// Spaces inserted by Tab
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Undo snapshots kept before the oldest is dropped
    #[serde(default = "default_undo_capacity")]
    pub undo_capacity: usize,

    /// Render `->`, `!=` and friends as single glyphs
    #[serde(default = "default_true")]
    pub ligatures: bool,

    /// Pixels scrolled per wheel notch
    #[serde(default = "default_scroll_speed")]
    pub scroll_speed: f32,

    /// Fraction of the remaining scroll distance covered per animation tick
    #[serde(default = "default_scroll_lerp")]
    pub scroll_lerp: f32,

    #[serde(default)]
    pub margins: Margins,
}

fn default_font_size() -> u32 {
    14
}

fn default_zoom() -> f32 {
    2.0
}

fn default_tab_size() -> usize {
    4
}

fn default_undo_capacity() -> usize {
    DEFAULT_UNDO_CAPACITY
}

fn default_true() -> bool {
    true
}

fn default_scroll_speed() -> f32 {
    100.0
}

fn default_scroll_lerp() -> f32 {
    0.1
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            zoom: default_zoom(),
            tab_size: default_tab_size(),
            undo_capacity: default_undo_capacity(),
            ligatures: true,
            scroll_speed: default_scroll_speed(),
            scroll_lerp: default_scroll_lerp(),
            margins: Margins::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
