//! Error types for confplug
//!
//! Provides the infrastructure error type shared by all confplug crates.
//! Setting-level rejections (unknown key, locked, out of range) live in
//! `confplug-store` and wrap this type when the durable medium fails.

use std::path::PathBuf;

/// Main error type for confplug infrastructure operations
#[derive(Debug, thiserror::Error)]
pub enum ConfplugError {
    // === IO Errors ===

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Configuration Errors ===

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    // === Schema Errors ===

    #[error("Schema conflict: {0}")]
    SchemaConflict(String),

    // === Persistence Errors ===

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Corrupt snapshot at {path}: {message}")]
    CorruptSnapshot { path: PathBuf, message: String },

    // === Internal Errors ===

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConfplugError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a schema conflict error
    pub fn schema_conflict(msg: impl Into<String>) -> Self {
        Self::SchemaConflict(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error reports an undecodable snapshot.
    ///
    /// Corrupt snapshots are recovered locally by starting from an empty
    /// state; every other load failure is surfaced to the caller.
    pub fn is_corrupt_snapshot(&self) -> bool {
        matches!(self, Self::CorruptSnapshot { .. })
    }
}

/// Result type alias using ConfplugError
pub type Result<T> = std::result::Result<T, ConfplugError>;
