//! Persistence adapters for setting snapshots
//!
//! The store never touches the durable medium itself. It hands complete
//! snapshots to a [`SnapshotStore`] and reads one back at startup.
//!
//! ```text
//! SettingStore ──save(&ConfigSnapshot)──▶ SnapshotStore ──▶ medium
//!              ◀──load()─────────────────
//! ```

mod file;
mod memory;

pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;

use confplug_utils::Result;

use crate::snapshot::ConfigSnapshot;

/// Durable medium for one configuration namespace
pub trait SnapshotStore: Send + Sync {
    /// Read the stored snapshot
    ///
    /// Returns `Ok(None)` when nothing has been stored yet and
    /// [`ConfplugError::CorruptSnapshot`](confplug_utils::ConfplugError::CorruptSnapshot)
    /// when stored data cannot be decoded.
    fn load(&self) -> Result<Option<ConfigSnapshot>>;

    /// Replace the stored snapshot
    ///
    /// Must be durable when it returns `Ok`.
    fn save(&self, snapshot: &ConfigSnapshot) -> Result<()>;

    /// Short human-readable location for log lines
    fn describe(&self) -> String;
}
