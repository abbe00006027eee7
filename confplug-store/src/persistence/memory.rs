//! In-process snapshot adapter
//!
//! Clones share one medium, so a test can keep a handle, hand a clone to a
//! store, and later open a second store on the same data or make the medium
//! fail.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use confplug_utils::{ConfplugError, Result};

use super::SnapshotStore;
use crate::snapshot::ConfigSnapshot;

#[derive(Debug)]
struct Medium {
    stored: Option<ConfigSnapshot>,
    writable: bool,
    corrupt: bool,
    saves: usize,
}

/// Snapshot adapter that keeps the snapshot in memory
#[derive(Debug, Clone)]
pub struct MemorySnapshotStore {
    medium: Arc<Mutex<Medium>>,
}

impl Default for MemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySnapshotStore {
    /// Empty, writable medium
    pub fn new() -> Self {
        Self {
            medium: Arc::new(Mutex::new(Medium {
                stored: None,
                writable: true,
                corrupt: false,
                saves: 0,
            })),
        }
    }

    /// Medium that already holds a snapshot
    pub fn with_snapshot(snapshot: ConfigSnapshot) -> Self {
        let store = Self::new();
        store.medium.lock().stored = Some(snapshot);
        store
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_writable(&self, writable: bool) {
        self.medium.lock().writable = writable;
    }

    /// Make subsequent loads report undecodable data
    pub fn set_corrupt(&self, corrupt: bool) {
        self.medium.lock().corrupt = corrupt;
    }

    /// Currently stored snapshot, if any
    pub fn stored(&self) -> Option<ConfigSnapshot> {
        self.medium.lock().stored.clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.medium.lock().saves
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<ConfigSnapshot>> {
        let medium = self.medium.lock();
        if medium.corrupt {
            return Err(ConfplugError::CorruptSnapshot {
                path: PathBuf::from("<memory>"),
                message: "stored data cannot be decoded".into(),
            });
        }
        Ok(medium.stored.clone())
    }

    fn save(&self, snapshot: &ConfigSnapshot) -> Result<()> {
        let mut medium = self.medium.lock();
        if !medium.writable {
            return Err(ConfplugError::persistence("in-memory medium is read-only"));
        }
        medium.stored = Some(snapshot.clone());
        medium.corrupt = false;
        medium.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
