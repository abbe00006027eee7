//! JSON file snapshot adapter
//!
//! Each save writes a temporary sibling, syncs it, then renames it over the
//! target, so a crash leaves either the old or the new snapshot on disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use confplug_utils::{ConfplugError, Result};

use super::SnapshotStore;
use crate::snapshot::ConfigSnapshot;

/// Snapshot adapter backed by a single JSON file
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Adapter for the given file; nothing is touched until load/save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Adapter for a namespace under the XDG data directory
    pub fn for_namespace(namespace: &str) -> Self {
        Self::new(confplug_utils::snapshot_file(namespace))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_err(path: &Path, source: std::io::Error) -> ConfplugError {
        ConfplugError::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    fn write_temp(&self, temp_path: &Path, snapshot: &ConfigSnapshot) -> Result<()> {
        let file = File::create(temp_path).map_err(|e| Self::write_err(temp_path, e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, snapshot).map_err(|e| {
            ConfplugError::persistence(format!("Failed to serialize snapshot: {}", e))
        })?;
        writer
            .write_all(b"\n")
            .map_err(|e| Self::write_err(temp_path, e))?;
        writer.flush().map_err(|e| Self::write_err(temp_path, e))?;

        writer
            .into_inner()
            .map_err(|e| Self::write_err(temp_path, e.into_error()))?
            .sync_all()
            .map_err(|e| Self::write_err(temp_path, e))
    }

    #[cfg(unix)]
    fn sync_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            File::open(parent)
                .and_then(|dir| dir.sync_all())
                .map_err(|e| Self::write_err(parent, e))?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn sync_parent(&self) -> Result<()> {
        Ok(())
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<ConfigSnapshot>> {
        // Raw bytes: invalid UTF-8 is a decode failure, not an I/O one
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfplugError::FileRead {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let snapshot: ConfigSnapshot =
            serde_json::from_slice(&content).map_err(|e| ConfplugError::CorruptSnapshot {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        debug!(
            "Read snapshot from {}: {} values",
            self.path.display(),
            snapshot.len()
        );

        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &ConfigSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Self::write_err(parent, e))?;
        }

        let temp_path = self.temp_path();
        if let Err(e) = self.write_temp(&temp_path, snapshot) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to remove {}: {}", temp_path.display(), cleanup);
                }
            }
            return Err(e);
        }

        fs::rename(&temp_path, &self.path).map_err(|e| Self::write_err(&self.path, e))?;
        self.sync_parent()?;

        debug!(
            "Wrote snapshot to {}: {} values",
            self.path.display(),
            snapshot.len()
        );

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, FileSnapshotStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(temp_dir.path().join("state").join("configplugins.json"));
        (temp_dir, store)
    }

    // ==================== Load Tests ====================

    #[test]
    fn test_load_missing_file() {
        let (_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_file() {
        let (_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_corrupt_snapshot());
    }

    #[test]
    fn test_load_invalid_utf8_is_corrupt() {
        let (_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        assert!(store.load().unwrap_err().is_corrupt_snapshot());
    }

    #[test]
    fn test_load_typed_values_is_corrupt() {
        let (_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"anim": 1, "tcm": true}"#).unwrap();

        assert!(store.load().unwrap_err().is_corrupt_snapshot());
    }

    #[test]
    fn test_load_nested_is_corrupt() {
        let (_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"settings": {"a": "b"}}"#).unwrap();

        assert!(store.load().unwrap_err().is_corrupt_snapshot());
    }

    // ==================== Save Tests ====================

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = create_test_store();
        let snapshot: ConfigSnapshot = [("analytics", "true"), ("comuner", "3")]
            .into_iter()
            .collect();

        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let (_dir, store) = create_test_store();
        store.save(&ConfigSnapshot::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (_dir, store) = create_test_store();
        store
            .save(&[("tcm", "false")].into_iter().collect())
            .unwrap();

        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_saved_format_is_flat_object() {
        let (_dir, store) = create_test_store();
        store
            .save(&[("tcm", "false"), ("anim", "1")].into_iter().collect())
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!({"anim": "1", "tcm": "false"}));
    }

    #[test]
    fn test_save_replaces_previous() {
        let (_dir, store) = create_test_store();
        store.save(&[("anim", "0")].into_iter().collect()).unwrap();
        store.save(&[("anim", "1")].into_iter().collect()).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.get("anim"), Some("1"));
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_save_unwritable_location() {
        let temp_dir = TempDir::new().unwrap();
        // Parent "directory" is a regular file, so nothing can be created below it
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = FileSnapshotStore::new(blocker.join("configplugins.json"));

        let err = store.save(&ConfigSnapshot::new()).unwrap_err();
        assert!(matches!(err, ConfplugError::FileWrite { .. }));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let store = FileSnapshotStore::new("/data/state/configplugins.json");
        assert_eq!(
            store.temp_path(),
            PathBuf::from("/data/state/configplugins.json.tmp")
        );
    }

    #[test]
    fn test_for_namespace_uses_snapshot_dir() {
        let store = FileSnapshotStore::for_namespace("lobby");
        assert!(store.path().ends_with("state/lobby.json"));
    }
}
