//! Host configuration for the confplug server
//!
//! Read once at startup from `config.toml`; missing files mean defaults.

mod defaults;
mod loader;
mod schema;

#[allow(unused_imports)]
pub use defaults::DEFAULT_CONFIG_TOML;
pub use loader::ConfigLoader;
pub use schema::*;
