//! Chat command parsing
//!
//! Grammar: `[/]<root> [<key> [<value>]]`, whitespace separated. The value is
//! a single word; anything after it is a usage error.

/// A parsed settings command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// `<root>`: list settable settings
    List,
    /// `<root> <key>`: show the current value
    Show { key: String },
    /// `<root> <key> <value>`: change a setting
    Set { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Usage: /{root} <setting> <value>")]
    Usage { root: String },
}

/// Parse a chat line addressed to `root`
///
/// Returns `Ok(None)` for lines that are not this command at all.
pub fn parse(line: &str, root: &str) -> Result<Option<ChatCommand>, ParseError> {
    let mut tokens = line.split_whitespace();

    let head = match tokens.next() {
        Some(head) => head.strip_prefix('/').unwrap_or(head),
        None => return Ok(None),
    };
    if head != root {
        return Ok(None);
    }

    let rest: Vec<&str> = tokens.collect();
    let command = match rest.as_slice() {
        [] => ChatCommand::List,
        [key] => ChatCommand::Show {
            key: key.to_string(),
        },
        [key, value] => ChatCommand::Set {
            key: key.to_string(),
            value: value.to_string(),
        },
        _ => {
            return Err(ParseError::Usage {
                root: root.to_string(),
            })
        }
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        assert_eq!(
            parse("/config judge_mode 1", "config").unwrap(),
            Some(ChatCommand::Set {
                key: "judge_mode".into(),
                value: "1".into()
            })
        );
    }

    #[test]
    fn test_parse_without_slash_and_extra_spaces() {
        assert_eq!(
            parse("  config   analytics\ttrue ", "config").unwrap(),
            Some(ChatCommand::Set {
                key: "analytics".into(),
                value: "true".into()
            })
        );
    }

    #[test]
    fn test_parse_list_and_show() {
        assert_eq!(parse("/config", "config").unwrap(), Some(ChatCommand::List));
        assert_eq!(
            parse("/config anim", "config").unwrap(),
            Some(ChatCommand::Show { key: "anim".into() })
        );
    }

    #[test]
    fn test_parse_other_lines_ignored() {
        assert_eq!(parse("hello everyone", "config").unwrap(), None);
        assert_eq!(parse("/configure x y", "config").unwrap(), None);
        assert_eq!(parse("", "config").unwrap(), None);
        assert_eq!(parse("   ", "config").unwrap(), None);
    }

    #[test]
    fn test_parse_multi_word_value_is_usage_error() {
        let err = parse("/config settings two words", "config").unwrap_err();
        assert_eq!(err.to_string(), "Usage: /config <setting> <value>");
    }

    #[test]
    fn test_parse_custom_root() {
        assert_eq!(
            parse("/cfg tcm false", "cfg").unwrap(),
            Some(ChatCommand::Set {
                key: "tcm".into(),
                value: "false".into()
            })
        );
        assert_eq!(parse("/config tcm false", "cfg").unwrap(), None);
    }
}
