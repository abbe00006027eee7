//! Response channel and user-facing message text

use confplug_store::{Expected, SettingError};

/// Where command responses are delivered
pub trait ResponseChannel {
    fn send_feedback(&mut self, text: &str);
    fn send_error(&mut self, text: &str);
}

/// A single response line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Feedback(String),
    Error(String),
}

impl Reply {
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Reply::Feedback(text) | Reply::Error(text) => text,
        }
    }
}

/// Collects replies so they can be handed across threads and printed later
#[derive(Debug, Default)]
pub struct BufferedChannel {
    replies: Vec<Reply>,
}

impl BufferedChannel {
    pub fn into_replies(self) -> Vec<Reply> {
        self.replies
    }
}

impl ResponseChannel for BufferedChannel {
    fn send_feedback(&mut self, text: &str) {
        self.replies.push(Reply::Feedback(text.to_string()));
    }

    fn send_error(&mut self, text: &str) {
        self.replies.push(Reply::Error(text.to_string()));
    }
}

pub const PLAYER_ONLY: &str = "This command can only be run by a player.";
pub const ADMIN_REQUIRED: &str = "Administrator permission is required to run this command.";

pub fn unknown_setting(key: &str) -> String {
    format!("Unknown setting: {}.", key)
}

pub fn changed(key: &str, value: &str) -> String {
    format!("Setting {} changed to \"{}\".", key, value)
}

pub fn current_value(key: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("Setting {} is \"{}\".", key, value),
        None => format!("Setting {} is not set.", key),
    }
}

/// Message for a rejected `get` or `set`
pub fn setting_error(err: &SettingError) -> String {
    match err {
        SettingError::UnknownSetting { name } => unknown_setting(name),
        SettingError::Locked { name } => format!("Setting {} is locked.", name),
        SettingError::TypeMismatch { name, expected, .. } => match expected {
            Expected::Integer => "Please enter a number.".to_string(),
            Expected::Boolean => format!("Value for {} must be true or false.", name),
            Expected::Word => format!("Value for {} must be a single word.", name),
        },
        SettingError::OutOfRange { min, max, .. } => {
            format!("Value must be between {} and {}.", min, max)
        }
        SettingError::PersistenceUnavailable { name, .. } => format!(
            "The configuration store is unavailable; setting {} was not changed.",
            name
        ),
    }
}
