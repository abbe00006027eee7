//! Routes parsed chat commands to the setting store
//!
//! Locked settings are not part of the command tree: addressing one reads
//! the same as an unknown setting. The store still refuses them on its own.

use std::sync::Arc;

use tracing::{debug, info};

use confplug_store::{SettingSchema, SettingStore};

use crate::auth::{Authorizer, Principal};
use crate::command::{self, ChatCommand};
use crate::config::CommandConfig;
use crate::reply::{self, ResponseChannel};

/// Outcome of one chat line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Not addressed to the settings command
    Ignored,
    Succeeded,
    Failed,
}

pub struct CommandDispatcher {
    store: Arc<SettingStore>,
    authorizer: Box<dyn Authorizer>,
    config: CommandConfig,
}

impl CommandDispatcher {
    pub fn new(
        store: Arc<SettingStore>,
        authorizer: impl Authorizer + 'static,
        config: CommandConfig,
    ) -> Self {
        Self {
            store,
            authorizer: Box::new(authorizer),
            config,
        }
    }

    /// Settings reachable through chat, in catalog order
    pub fn commands(&self) -> impl Iterator<Item = &SettingSchema> + '_ {
        self.store.list_known_settings().filter(|s| !s.locked)
    }

    fn command_schema(&self, key: &str) -> Option<&SettingSchema> {
        self.store.lookup(key).filter(|s| !s.locked)
    }

    /// Handle one chat line; may block while a new value is saved
    pub fn handle_line(
        &self,
        principal: &Principal,
        line: &str,
        channel: &mut dyn ResponseChannel,
    ) -> CommandStatus {
        let command = match command::parse(line, &self.config.root) {
            Ok(Some(command)) => command,
            Ok(None) => return CommandStatus::Ignored,
            Err(e) => {
                channel.send_error(&e.to_string());
                return CommandStatus::Failed;
            }
        };

        if !principal.is_player && !self.config.allow_console {
            channel.send_error(reply::PLAYER_ONLY);
            return CommandStatus::Failed;
        }
        if !self.authorizer.is_admin(principal) {
            debug!("{} is not allowed to run /{}", principal.name, self.config.root);
            channel.send_error(reply::ADMIN_REQUIRED);
            return CommandStatus::Failed;
        }

        match command {
            ChatCommand::List => {
                for schema in self.commands() {
                    channel.send_feedback(&format!("{} ({})", schema.name, schema.kind));
                }
                CommandStatus::Succeeded
            }
            ChatCommand::Show { key } => {
                if self.command_schema(&key).is_none() {
                    channel.send_error(&reply::unknown_setting(&key));
                    return CommandStatus::Failed;
                }
                match self.store.get(&key) {
                    Ok(value) => {
                        channel.send_feedback(&reply::current_value(&key, value.as_deref()));
                        CommandStatus::Succeeded
                    }
                    Err(e) => {
                        channel.send_error(&reply::setting_error(&e));
                        CommandStatus::Failed
                    }
                }
            }
            ChatCommand::Set { key, value } => {
                if self.command_schema(&key).is_none() {
                    channel.send_error(&reply::unknown_setting(&key));
                    return CommandStatus::Failed;
                }
                match self.store.set(&key, &value) {
                    Ok(stored) => {
                        info!("{} set {} to {}", principal.name, key, stored);
                        channel.send_feedback(&reply::changed(&key, &stored));
                        CommandStatus::Succeeded
                    }
                    Err(e) => {
                        channel.send_error(&reply::setting_error(&e));
                        CommandStatus::Failed
                    }
                }
            }
        }
    }
}
