//! confplug-utils: Common utilities shared across confplug crates
//!
//! This crate provides:
//! - Unified error types ([`ConfplugError`], [`Result`])
//! - Logging infrastructure ([`init_logging_with_config`], [`LogConfig`])
//! - XDG-compliant path utilities ([`paths`] module)

pub mod error;
pub mod logging;
pub mod paths;

// Re-export main types at crate root for convenience
pub use error::{ConfplugError, Result};
pub use logging::{init_logging_with_config, LogConfig, LogOutput};

// Re-export commonly used path functions
pub use paths::{
    catalog_file, config_dir, config_file, data_dir, log_dir, snapshot_dir,
    snapshot_file, state_dir,
};
