//! Where runepad keeps its files on disk
//!
//! ```text
//! <base>/runepad/
//!   config.yaml   EditorConfig, read at startup
//!   logs/         daily rolling runepad.log.* from tracing::init
//! ```
//!
//! `<base>` is `$XDG_CONFIG_HOME` when set and non-empty, else `~/.config`.
//! Windows uses the roaming app data folder instead. The scratch
//! `buffer.txt` is not here; it lives in the working directory.

use std::{ffi::OsString, fs, path::PathBuf};

const APP_DIR: &str = "runepad";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// `<base>/runepad`, or `None` when no home directory can be found
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = dirs::config_dir();

    #[cfg(not(target_os = "windows"))]
    let base = unix_base(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir());

    base.map(|base| base.join(APP_DIR))
}

/// An empty `XDG_CONFIG_HOME` counts as unset
#[cfg_attr(target_os = "windows", allow(dead_code))]
fn unix_base(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match xdg_config_home {
        Some(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg)),
        _ => home.map(|home| home.join(".config")),
    }
}

/// The YAML file `EditorConfig::load` and `EditorConfig::save` use
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Directory the rolling file appender writes into
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory (and its parents) if missing
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No home directory for runepad logs".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create log directory {}: {}", logs.display(), e))?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdg_config_home_wins_over_home() {
        let base = unix_base(Some("/xdg".into()), Some(PathBuf::from("/home/ann")));
        assert_eq!(base, Some(PathBuf::from("/xdg")));
    }

    #[test]
    fn test_empty_xdg_falls_back_to_dot_config() {
        let base = unix_base(Some(OsString::new()), Some(PathBuf::from("/home/ann")));
        assert_eq!(base, Some(PathBuf::from("/home/ann/.config")));
        assert_eq!(unix_base(None, None), None);
    }

    #[test]
    fn test_files_sit_under_app_dir() {
        let (Some(dir), Some(file), Some(logs)) = (config_dir(), config_file(), logs_dir()) else {
            return;
        };
        assert!(dir.ends_with(APP_DIR));
        assert_eq!(file, dir.join("config.yaml"));
        assert_eq!(logs, dir.join("logs"));
    }
}
