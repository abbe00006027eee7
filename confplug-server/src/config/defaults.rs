//! Default configuration values
//!
//! Reference copy of the defaults as TOML. The schema's `Default` impls are
//! authoritative; a test keeps the two in sync.

/// Default host configuration as TOML
pub const DEFAULT_CONFIG_TOML: &str = r##"
# confplug host configuration

[store]
namespace = "configplugins"
# snapshot_path = "/srv/world/data/configplugins.json"
# catalog_path = "/srv/world/catalog.toml"

[command]
root = "config"
admin_tag = "admin"
allow_console = false
"##;
