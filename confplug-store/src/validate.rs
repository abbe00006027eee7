//! Value validation against a setting schema
//!
//! Rules are applied in a fixed order: lock, then type, then range.

use crate::error::{Expected, SettingError};
use crate::schema::{SettingKind, SettingSchema};

/// Validate a raw value for a mutation and return its canonical text
pub fn validate(schema: &SettingSchema, raw: &str) -> Result<String, SettingError> {
    if schema.locked {
        return Err(SettingError::Locked {
            name: schema.name.clone(),
        });
    }

    validate_kind(&schema.name, schema.kind, raw)
}

/// Type and range checks only, ignoring the lock
///
/// Also used at load time to spot persisted values that no longer fit.
pub fn validate_kind(name: &str, kind: SettingKind, raw: &str) -> Result<String, SettingError> {
    let mismatch = |expected| SettingError::TypeMismatch {
        name: name.to_string(),
        expected,
        value: raw.to_string(),
    };

    match kind {
        SettingKind::Boolean => match raw {
            "true" | "false" => Ok(raw.to_string()),
            _ => Err(mismatch(Expected::Boolean)),
        },
        SettingKind::String => {
            if !raw.is_empty() && raw.chars().all(is_word_char) {
                Ok(raw.to_string())
            } else {
                Err(mismatch(Expected::Word))
            }
        }
        SettingKind::IntegerRange { min, max } => {
            let value: i64 = raw.parse().map_err(|_| mismatch(Expected::Integer))?;
            if value < min || value > max {
                return Err(SettingError::OutOfRange {
                    name: name.to_string(),
                    value,
                    min,
                    max,
                });
            }
            Ok(value.to_string())
        }
    }
}

/// Characters allowed in an unquoted word: `0-9 A-Z a-z _ - . +`
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingErrorKind;

    // ==================== Lock Tests ====================

    #[test]
    fn test_locked_rejects_everything() {
        let schemas = [
            SettingSchema::boolean("login").locked(),
            SettingSchema::string("sys").locked(),
            SettingSchema::integer_range("anim", 0, 1).locked(),
        ];

        for schema in &schemas {
            for input in ["true", "false", "0", "1", "word", "", "two words"] {
                let err = validate(schema, input).unwrap_err();
                assert_eq!(err.kind(), SettingErrorKind::Locked, "{} <- {:?}", schema.name, input);
            }
        }
    }

    // ==================== Boolean Tests ====================

    #[test]
    fn test_boolean_accepts_lowercase_literals() {
        let schema = SettingSchema::boolean("analytics");
        assert_eq!(validate(&schema, "true").unwrap(), "true");
        assert_eq!(validate(&schema, "false").unwrap(), "false");
    }

    #[test]
    fn test_boolean_rejects_other_tokens() {
        let schema = SettingSchema::boolean("analytics");
        for input in ["1", "0", "True", "FALSE", "yes", "on", "", " true"] {
            let err = validate(&schema, input).unwrap_err();
            assert!(
                matches!(err, SettingError::TypeMismatch { expected: Expected::Boolean, .. }),
                "{:?} should be a boolean mismatch",
                input
            );
        }
    }

    // ==================== String Tests ====================

    #[test]
    fn test_string_accepts_word_verbatim() {
        let schema = SettingSchema::string("settings");
        assert_eq!(validate(&schema, "Hard-Mode_2").unwrap(), "Hard-Mode_2");
    }

    #[test]
    fn test_string_rejects_non_word_input() {
        let schema = SettingSchema::string("settings");
        for input in [
            "",
            "two words",
            "tab\tbed",
            "trailing\n",
            "a/b",
            "日本語",
            "x\"y",
            "semi;colon",
            "a:b",
        ] {
            let err = validate(&schema, input).unwrap_err();
            assert!(matches!(err, SettingError::TypeMismatch { expected: Expected::Word, .. }));
        }
    }

    #[test]
    fn test_string_accepts_word_characters() {
        let schema = SettingSchema::string("settings");
        for input in ["classic", "Mode_2", "v1.2-beta", "a+b", "-", "007"] {
            assert_eq!(validate(&schema, input).unwrap(), input);
        }
    }

    // ==================== Integer Range Tests ====================

    #[test]
    fn test_integer_beyond_32_bits_is_out_of_range() {
        let schema = SettingSchema::integer_range("comuner", 0, 3);
        let err = validate(&schema, "3000000000").unwrap_err();
        assert!(matches!(err, SettingError::OutOfRange { value: 3_000_000_000, .. }));

        let err = validate(&schema, "99999999999999999999").unwrap_err();
        assert_eq!(err.kind(), SettingErrorKind::TypeMismatch);
    }

    #[test]
    fn test_integer_range_boundaries() {
        let schema = SettingSchema::integer_range("comuner", 0, 3);
        for value in 0..=3 {
            assert_eq!(validate(&schema, &value.to_string()).unwrap(), value.to_string());
        }

        for value in [-1, 4, 100] {
            let err = validate(&schema, &value.to_string()).unwrap_err();
            match err {
                SettingError::OutOfRange { min, max, value: v, .. } => {
                    assert_eq!((min, max, v), (0, 3, value));
                }
                other => panic!("expected OutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_integer_range_not_a_number() {
        let schema = SettingSchema::integer_range("judge_mode", 0, 1);
        for input in ["", "abc", "1.0", "0x1", " 1", "1 ", "99999999999999999999"] {
            let err = validate(&schema, input).unwrap_err();
            assert!(
                matches!(err, SettingError::TypeMismatch { expected: Expected::Integer, .. }),
                "{:?} should not parse",
                input
            );
        }
    }

    #[test]
    fn test_integer_range_normalizes() {
        let schema = SettingSchema::integer_range("anim", -5, 5);
        assert_eq!(validate(&schema, "+1").unwrap(), "1");
        assert_eq!(validate(&schema, "01").unwrap(), "1");
        assert_eq!(validate(&schema, "-0").unwrap(), "0");
        assert_eq!(validate(&schema, "-5").unwrap(), "-5");
    }

    #[test]
    fn test_validate_kind_ignores_lock() {
        let schema = SettingSchema::boolean("login").locked();
        assert_eq!(validate_kind(&schema.name, schema.kind, "true").unwrap(), "true");
    }
}
