//! Setting-level errors returned by the store

use std::fmt;

use confplug_utils::ConfplugError;

/// What a rejected value was expected to look like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Literal `true` or `false`
    Boolean,
    /// A single unquoted word (`0-9 A-Z a-z _ - . +`)
    Word,
    /// A base-10 integer
    Integer,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Boolean => write!(f, "true or false"),
            Expected::Word => write!(f, "a single word"),
            Expected::Integer => write!(f, "a number"),
        }
    }
}

/// Reason a `get` or `set` was refused
///
/// None of these are retried. A failed `set` never changes the store.
#[derive(Debug, thiserror::Error)]
pub enum SettingError {
    #[error("Unknown setting: {name}")]
    UnknownSetting { name: String },

    #[error("Setting {name} is locked")]
    Locked { name: String },

    #[error("Invalid value '{value}' for {name}: must be {expected}")]
    TypeMismatch {
        name: String,
        expected: Expected,
        value: String,
    },

    #[error("Value {value} for {name} is out of range: must be between {min} and {max}")]
    OutOfRange {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Setting {name} was not changed, storage unavailable: {source}")]
    PersistenceUnavailable {
        name: String,
        #[source]
        source: ConfplugError,
    },
}

/// Field-less discriminant of [`SettingError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingErrorKind {
    UnknownSetting,
    Locked,
    TypeMismatch,
    OutOfRange,
    PersistenceUnavailable,
}

impl SettingError {
    pub fn kind(&self) -> SettingErrorKind {
        match self {
            SettingError::UnknownSetting { .. } => SettingErrorKind::UnknownSetting,
            SettingError::Locked { .. } => SettingErrorKind::Locked,
            SettingError::TypeMismatch { .. } => SettingErrorKind::TypeMismatch,
            SettingError::OutOfRange { .. } => SettingErrorKind::OutOfRange,
            SettingError::PersistenceUnavailable { .. } => {
                SettingErrorKind::PersistenceUnavailable
            }
        }
    }

    /// Name of the setting the error refers to
    pub fn name(&self) -> &str {
        match self {
            SettingError::UnknownSetting { name }
            | SettingError::Locked { name }
            | SettingError::TypeMismatch { name, .. }
            | SettingError::OutOfRange { name, .. }
            | SettingError::PersistenceUnavailable { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display_carries_bounds() {
        let err = SettingError::OutOfRange {
            name: "judge_mode".into(),
            value: 2,
            min: 0,
            max: 1,
        };
        assert_eq!(
            err.to_string(),
            "Value 2 for judge_mode is out of range: must be between 0 and 1"
        );
        assert_eq!(err.kind(), SettingErrorKind::OutOfRange);
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = SettingError::TypeMismatch {
            name: "anim".into(),
            expected: Expected::Integer,
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "Invalid value 'abc' for anim: must be a number");
    }

    #[test]
    fn test_persistence_unavailable_has_source() {
        use std::error::Error;

        let err = SettingError::PersistenceUnavailable {
            name: "analytics".into(),
            source: ConfplugError::persistence("disk full"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("disk full"));
        assert_eq!(err.name(), "analytics");
    }

    #[test]
    fn test_name_accessor() {
        let err = SettingError::Locked {
            name: "login".into(),
        };
        assert_eq!(err.name(), "login");
        assert_eq!(err.kind(), SettingErrorKind::Locked);
    }
}
