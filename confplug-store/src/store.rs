//! The setting store
//!
//! Reads go through an [`ArcSwap`] holding the last durable snapshot, so
//! they never block and never see a half-applied update. Writes are
//! serialized by one store-wide mutex around build → save → publish. A new
//! snapshot is published only after the adapter has saved it, which keeps
//! memory and the durable medium identical when a save fails.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use confplug_utils::Result;

use crate::error::SettingError;
use crate::persistence::SnapshotStore;
use crate::schema::{SchemaRegistry, SettingSchema};
use crate::snapshot::ConfigSnapshot;
use crate::validate::{validate, validate_kind};

/// Validated, persisted settings for one configuration namespace
pub struct SettingStore {
    registry: SchemaRegistry,
    adapter: Box<dyn SnapshotStore>,
    current: ArcSwap<ConfigSnapshot>,
    write_lock: Mutex<()>,
}

impl SettingStore {
    /// Load the persisted snapshot or start empty
    ///
    /// A corrupt snapshot is logged once and replaced by an empty one. Any
    /// other load failure is returned, since starting empty would overwrite
    /// the stored values on the next save.
    pub fn open(registry: SchemaRegistry, adapter: impl SnapshotStore + 'static) -> Result<Self> {
        let adapter: Box<dyn SnapshotStore> = Box::new(adapter);
        let location = adapter.describe();

        let snapshot = match adapter.load() {
            Ok(Some(snapshot)) => {
                info!(
                    "Loaded {} settings from {}",
                    snapshot.len(),
                    location
                );
                snapshot
            }
            Ok(None) => {
                info!("No stored settings at {}, starting empty", location);
                ConfigSnapshot::new()
            }
            Err(e) if e.is_corrupt_snapshot() => {
                warn!("{}; starting with no settings", e);
                ConfigSnapshot::new()
            }
            Err(e) => return Err(e),
        };

        report_schema_drift(&registry, &snapshot);

        Ok(Self {
            registry,
            adapter,
            current: ArcSwap::from_pointee(snapshot),
            write_lock: Mutex::new(()),
        })
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn lookup(&self, name: &str) -> Option<&SettingSchema> {
        self.registry.lookup(name)
    }

    /// Every catalog entry in declaration order, locked ones included
    pub fn list_known_settings(&self) -> impl Iterator<Item = &SettingSchema> + Clone {
        self.registry.iter()
    }

    /// Current value of a setting, `Ok(None)` if it was never set
    pub fn get(&self, name: &str) -> std::result::Result<Option<String>, SettingError> {
        if !self.registry.contains(name) {
            return Err(SettingError::UnknownSetting {
                name: name.to_string(),
            });
        }
        Ok(self.current.load().get(name).map(str::to_string))
    }

    /// Validate, persist and apply a new value
    ///
    /// Blocks for the duration of the save. Returns the normalized value
    /// once it is durable; on any error the store is unchanged.
    pub fn set(&self, name: &str, raw: &str) -> std::result::Result<String, SettingError> {
        let schema = self
            .registry
            .lookup(name)
            .ok_or_else(|| SettingError::UnknownSetting {
                name: name.to_string(),
            })?;

        let value = validate(schema, raw).map_err(|e| {
            debug!("Rejected {}={:?}: {}", name, raw, e);
            e
        })?;

        let _guard = self.write_lock.lock();
        let current = self.current.load_full();

        if current.get(name) == Some(value.as_str()) {
            debug!("{} already {}, nothing to save", name, value);
            return Ok(value);
        }

        let next = current.with_value(name, &value);
        self.adapter.save(&next).map_err(|source| {
            warn!("Failed to persist {}={}: {}", name, value, source);
            SettingError::PersistenceUnavailable {
                name: name.to_string(),
                source,
            }
        })?;
        self.current.store(Arc::new(next));

        info!("Setting {} changed to {}", name, value);
        Ok(value)
    }

    /// The last durable snapshot
    pub fn snapshot(&self) -> Arc<ConfigSnapshot> {
        self.current.load_full()
    }
}

impl std::fmt::Debug for SettingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingStore")
            .field("settings", &self.registry.len())
            .field("stored", &self.current.load().len())
            .field("medium", &self.adapter.describe())
            .finish()
    }
}

/// Log stored values that the current catalog no longer accepts
///
/// Nothing is migrated: stale keys are kept and written back on the next
/// save, and retyped values are returned as stored.
fn report_schema_drift(registry: &SchemaRegistry, snapshot: &ConfigSnapshot) {
    for (name, raw) in snapshot.iter() {
        match registry.lookup(name) {
            None => warn!("Stored setting {} is not in the catalog; keeping it", name),
            Some(schema) => {
                if let Err(e) = validate_kind(name, schema.kind, raw) {
                    warn!("Stored value no longer valid: {}", e);
                }
            }
        }
    }
}
