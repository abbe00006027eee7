//! Path utilities for confplug
//!
//! Handles XDG Base Directory specification compliance for config,
//! state and data directories.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Application identifier for XDG directories
const APP_NAME: &str = "confplug";

/// Get project directories
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the configuration directory
///
/// Location: `$XDG_CONFIG_HOME/confplug` or `~/.config/confplug`
pub fn config_dir() -> PathBuf {
    project_dirs()
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(fallback_config_dir)
}

/// Get the host configuration file path
///
/// Location: `$XDG_CONFIG_HOME/confplug/config.toml`
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the setting catalog file path
///
/// Location: `$XDG_CONFIG_HOME/confplug/catalog.toml`
pub fn catalog_file() -> PathBuf {
    config_dir().join("catalog.toml")
}

/// Get the state directory
///
/// Location: `$XDG_STATE_HOME/confplug` or `~/.local/state/confplug`
pub fn state_dir() -> PathBuf {
    project_dirs()
        .and_then(|p| p.state_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(fallback_state_dir)
}

/// Get the data directory (persisted setting snapshots)
///
/// Location: `$XDG_DATA_HOME/confplug` or `~/.local/share/confplug`
pub fn data_dir() -> PathBuf {
    project_dirs()
        .map(|p| p.data_local_dir().to_path_buf())
        .unwrap_or_else(fallback_data_dir)
}

/// Get the log directory
///
/// Location: `$XDG_STATE_HOME/confplug/log`
pub fn log_dir() -> PathBuf {
    state_dir().join("log")
}

/// Get the directory holding one snapshot file per namespace
///
/// Location: `$XDG_DATA_HOME/confplug/state`
pub fn snapshot_dir() -> PathBuf {
    data_dir().join("state")
}

/// Get the snapshot file for a configuration namespace
///
/// Location: `$XDG_DATA_HOME/confplug/state/{namespace}.json`
pub fn snapshot_file(namespace: &str) -> PathBuf {
    snapshot_dir().join(format!("{}.json", namespace))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

// Fallback implementations when ProjectDirs is unavailable

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

fn fallback_config_dir() -> PathBuf {
    home_dir().join(".config").join(APP_NAME)
}

fn fallback_state_dir() -> PathBuf {
    home_dir().join(".local").join("state").join(APP_NAME)
}

fn fallback_data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join(APP_NAME)
}
