//! confplug-store: typed configuration store with validated mutation
//!
//! A fixed catalog of settings ([`SchemaRegistry`]) describes what may be
//! set and how each value is checked. [`SettingStore`] holds the current
//! values, validates every update, and flushes the full [`ConfigSnapshot`]
//! through a [`SnapshotStore`] before the update becomes visible.
//!
//! ```ignore
//! use confplug_store::{CatalogLoader, FileSnapshotStore, SettingStore};
//!
//! let registry = CatalogLoader::default_registry()?;
//! let adapter = FileSnapshotStore::new("/srv/world/configplugins.json");
//! let store = SettingStore::open(registry, adapter)?;
//!
//! store.set("judge_mode", "1")?;
//! assert_eq!(store.get("judge_mode")?.as_deref(), Some("1"));
//! ```

pub mod catalog;
pub mod error;
pub mod persistence;
pub mod schema;
pub mod snapshot;
pub mod store;
pub mod validate;

pub use catalog::{CatalogLoader, KindName, SettingDef, DEFAULT_CATALOG_TOML, DEFAULT_NAMESPACE};
pub use error::{Expected, SettingError, SettingErrorKind};
pub use persistence::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore};
pub use schema::{SchemaRegistry, SettingKind, SettingSchema};
pub use snapshot::ConfigSnapshot;
pub use store::SettingStore;
pub use validate::{validate, validate_kind};
