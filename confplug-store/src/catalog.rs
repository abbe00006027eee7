//! Setting catalog loading
//!
//! The catalog is declared in TOML as an array of `[[setting]]` tables. The
//! embedded default reproduces the stock plugin settings and is used when
//! no catalog file exists.

use std::path::Path;

use serde::{Deserialize, Serialize};

use confplug_utils::{catalog_file, ConfplugError, Result};

use crate::schema::{SchemaRegistry, SettingKind, SettingSchema};

/// Namespace used when the host does not configure one
pub const DEFAULT_NAMESPACE: &str = "configplugins";

/// Stock setting catalog
pub const DEFAULT_CATALOG_TOML: &str = r##"
# confplug setting catalog
#
# kind = "boolean" | "string" | "integer_range"
# integer_range settings need inclusive `min` and `max`.
# locked settings are listed but can never be changed.

[[setting]]
name = "analytics"
kind = "boolean"

[[setting]]
name = "tcm"
kind = "boolean"

[[setting]]
name = "settings"
kind = "string"

[[setting]]
name = "sys"
kind = "string"
locked = true

[[setting]]
name = "anattribute"
kind = "boolean"

[[setting]]
name = "anim"
kind = "integer_range"
min = 0
max = 1

[[setting]]
name = "inventory_lock"
kind = "integer_range"
min = 0
max = 1

[[setting]]
name = "judge_mode"
kind = "integer_range"
min = 0
max = 1

[[setting]]
name = "13ninAdManager"
kind = "integer_range"
min = 0
max = 1

[[setting]]
name = "seer_madness"
kind = "boolean"

[[setting]]
name = "login"
kind = "boolean"
locked = true

[[setting]]
name = "comuner"
kind = "integer_range"
min = 0
max = 3
"##;

/// Kind names accepted in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindName {
    Boolean,
    String,
    IntegerRange,
}

/// One `[[setting]]` table as written in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingDef {
    pub name: String,
    pub kind: KindName,
    #[serde(default)]
    pub locked: bool,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl SettingDef {
    fn into_schema(self) -> std::result::Result<SettingSchema, String> {
        let kind = match (self.kind, self.min, self.max) {
            (KindName::Boolean, None, None) => SettingKind::Boolean,
            (KindName::String, None, None) => SettingKind::String,
            (KindName::IntegerRange, Some(min), Some(max)) => SettingKind::IntegerRange { min, max },
            (KindName::IntegerRange, _, _) => {
                return Err(format!(
                    "setting '{}': integer_range needs both min and max",
                    self.name
                ))
            }
            (_, _, _) => {
                return Err(format!(
                    "setting '{}': min/max are only allowed for integer_range",
                    self.name
                ))
            }
        };

        let schema = SettingSchema::new(self.name, kind);
        Ok(if self.locked { schema.locked() } else { schema })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default, rename = "setting")]
    settings: Vec<SettingDef>,
}

/// Catalog loader
pub struct CatalogLoader;

impl CatalogLoader {
    /// Registry built from the embedded stock catalog
    pub fn default_registry() -> Result<SchemaRegistry> {
        Self::parse(DEFAULT_CATALOG_TOML, Path::new("<default catalog>"))
    }

    /// Load from the default location, falling back to the stock catalog
    pub fn load() -> Result<SchemaRegistry> {
        let path = catalog_file();
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            Self::default_registry()
        }
    }

    /// Load from a specific path; the file must exist
    pub fn load_from_path(path: &Path) -> Result<SchemaRegistry> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfplugError::ConfigNotFound(path.to_path_buf())
            } else {
                ConfplugError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        Self::parse(&content, path)
    }

    /// Parse a catalog from string
    pub fn parse(content: &str, path: &Path) -> Result<SchemaRegistry> {
        let file: CatalogFile = toml::from_str(content).map_err(|e| ConfplugError::ConfigInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let schemas = file
            .settings
            .into_iter()
            .map(SettingDef::into_schema)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|message| ConfplugError::ConfigInvalid {
                path: path.to_path_buf(),
                message,
            })?;

        SchemaRegistry::new(schemas)
    }
}
