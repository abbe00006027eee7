//! Configuration loader

use std::path::Path;

use confplug_utils::{config_file, ConfplugError, Result};

use super::HostConfig;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from default location
    pub fn load() -> Result<HostConfig> {
        let path = config_file();
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            Ok(HostConfig::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<HostConfig> {
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

    /// Parse configuration from string
    pub fn parse(content: &str, path: &Path) -> Result<HostConfig> {
        toml::from_str(content).map_err(|e| ConfplugError::ConfigInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Validate configuration
    pub fn validate(config: &HostConfig) -> Result<()> {
        let namespace = &config.store.namespace;
        if namespace.is_empty() {
            return Err(ConfplugError::config("store.namespace must not be empty"));
        }
        if namespace.contains(['/', '\\']) || namespace == "." || namespace == ".." {
            return Err(ConfplugError::config(format!(
                "store.namespace '{}' must be a plain name",
                namespace
            )));
        }

        let root = &config.command.root;
        if root.is_empty() || root.chars().any(char::is_whitespace) || root.starts_with('/') {
            return Err(ConfplugError::config(
                "command.root must be a single word without a leading '/'",
            ));
        }

        if config.command.admin_tag.is_empty() {
            return Err(ConfplugError::config("command.admin_tag must not be empty"));
        }

        Ok(())
    }

    /// Load from an explicit path or the default location, then validate
    pub fn load_and_validate(path: Option<&Path>) -> Result<HostConfig> {
        let config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load()?,
        };
        Self::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG_TOML;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_reference_toml() {
        let parsed = ConfigLoader::parse(DEFAULT_CONFIG_TOML, Path::new("defaults.toml")).unwrap();
        assert_eq!(parsed, HostConfig::default());
        ConfigLoader::validate(&parsed).unwrap();
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(
            &path,
            r#"
            [store]
            namespace = "lobby"

            [command]
            admin_tag = "op"
            "#,
        )
        .unwrap();

        let config = ConfigLoader::load_and_validate(Some(&path)).unwrap();
        assert_eq!(config.store.namespace, "lobby");
        assert_eq!(config.command.admin_tag, "op");
        // Unspecified fields keep their defaults
        assert_eq!(config.command.root, "config");
        assert!(config
            .store
            .resolved_snapshot_path()
            .ends_with("lobby.json"));
    }

    #[test]
    fn test_explicit_snapshot_path_wins() {
        let config = ConfigLoader::parse(
            r#"
            [store]
            snapshot_path = "/srv/world/data/configplugins.json"
            "#,
            Path::new("config.toml"),
        )
        .unwrap();

        assert_eq!(
            config.store.resolved_snapshot_path(),
            Path::new("/srv/world/data/configplugins.json")
        );
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempdir().unwrap();
        let err = ConfigLoader::load_and_validate(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, ConfplugError::ConfigNotFound(_)));
    }

    #[test]
    fn test_validate_rejects_path_namespace() {
        let mut config = HostConfig::default();
        config.store.namespace = "../escape".into();
        assert!(ConfigLoader::validate(&config).is_err());

        config.store.namespace = String::new();
        assert!(ConfigLoader::validate(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_root() {
        let mut config = HostConfig::default();
        config.command.root = "/config".into();
        assert!(ConfigLoader::validate(&config).is_err());

        config.command.root = "two words".into();
        assert!(ConfigLoader::validate(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_admin_tag() {
        let mut config = HostConfig::default();
        config.command.admin_tag = String::new();
        assert!(ConfigLoader::validate(&config).is_err());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = ConfigLoader::parse("invalid { toml", Path::new("test.toml"));
        assert!(result.is_err());
    }
}
