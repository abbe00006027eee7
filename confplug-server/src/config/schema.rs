//! Host configuration schema structs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use confplug_store::DEFAULT_NAMESPACE;
use confplug_utils::snapshot_file;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub store: StoreConfig,
    pub command: CommandConfig,
}

/// Where settings live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Configuration namespace; names the snapshot file
    pub namespace: String,
    /// Explicit snapshot file, overriding the namespace default
    pub snapshot_path: Option<PathBuf>,
    /// Explicit catalog file, overriding `catalog.toml` in the config dir
    pub catalog_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            snapshot_path: None,
            catalog_path: None,
        }
    }
}

impl StoreConfig {
    /// Snapshot file actually used
    pub fn resolved_snapshot_path(&self) -> PathBuf {
        self.snapshot_path
            .clone()
            .unwrap_or_else(|| snapshot_file(&self.namespace))
    }
}

/// Chat command surface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Command literal, e.g. `config` for `/config judge_mode 1`
    pub root: String,
    /// Tag a player needs to change settings
    pub admin_tag: String,
    /// Accept commands from non-player principals
    pub allow_console: bool,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            root: "config".to_string(),
            admin_tag: "admin".to_string(),
            allow_console: false,
        }
    }
}
