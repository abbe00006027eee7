//! Setting schema and the immutable registry built from it

use std::collections::HashMap;
use std::fmt;

use confplug_utils::{ConfplugError, Result};

/// Declared type of a setting, with its constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Exactly `true` or `false`
    Boolean,
    /// A single whitespace-free word, stored verbatim
    String,
    /// A base-10 integer within inclusive bounds
    IntegerRange { min: i64, max: i64 },
}

impl SettingKind {
    /// Catalog name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            SettingKind::Boolean => "boolean",
            SettingKind::String => "string",
            SettingKind::IntegerRange { .. } => "integer_range",
        }
    }

    /// Inclusive bounds for integer settings
    pub fn range(&self) -> Option<(i64, i64)> {
        match self {
            SettingKind::IntegerRange { min, max } => Some((*min, *max)),
            _ => None,
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingKind::Boolean => write!(f, "boolean"),
            SettingKind::String => write!(f, "string"),
            SettingKind::IntegerRange { min, max } => write!(f, "integer {}..={}", min, max),
        }
    }
}

/// One entry of the setting catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingSchema {
    pub name: String,
    pub kind: SettingKind,
    /// Listed in the catalog but rejected for every mutation
    pub locked: bool,
}

impl SettingSchema {
    pub fn new(name: impl Into<String>, kind: SettingKind) -> Self {
        Self {
            name: name.into(),
            kind,
            locked: false,
        }
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, SettingKind::Boolean)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, SettingKind::String)
    }

    pub fn integer_range(name: impl Into<String>, min: i64, max: i64) -> Self {
        Self::new(name, SettingKind::IntegerRange { min, max })
    }

    /// Mark the setting read-only
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    fn check(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ConfplugError::config("setting name must not be empty"));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(ConfplugError::config(format!(
                "setting name '{}' must not contain whitespace",
                self.name
            )));
        }
        if let SettingKind::IntegerRange { min, max } = self.kind {
            if min > max {
                return Err(ConfplugError::config(format!(
                    "setting '{}' has an empty range: min {} > max {}",
                    self.name, min, max
                )));
            }
        }
        Ok(())
    }
}

/// Immutable catalog mapping setting names to their schema
///
/// Names are case-sensitive. Declaration order is preserved for listing.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: Vec<SettingSchema>,
    index: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Build a registry from an ordered list of entries
    ///
    /// A duplicate name is a [`ConfplugError::SchemaConflict`].
    pub fn new(entries: impl IntoIterator<Item = SettingSchema>) -> Result<Self> {
        let mut registry = Self::default();

        for entry in entries {
            entry.check()?;
            if registry.index.contains_key(&entry.name) {
                return Err(ConfplugError::schema_conflict(format!(
                    "duplicate setting name '{}'",
                    entry.name
                )));
            }
            registry
                .index
                .insert(entry.name.clone(), registry.entries.len());
            registry.entries.push(entry);
        }

        Ok(registry)
    }

    pub fn lookup(&self, name: &str) -> Option<&SettingSchema> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, SettingSchema> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SchemaRegistry {
    type Item = &'a SettingSchema;
    type IntoIter = std::slice::Iter<'a, SettingSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
