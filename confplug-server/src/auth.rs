//! Who is issuing a command and whether they may change settings

use std::collections::BTreeSet;

/// The sender of a chat command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: String,
    /// False for the server console and command blocks
    pub is_player: bool,
    /// Command tags carried by the player
    pub tags: BTreeSet<String>,
}

impl Principal {
    pub fn player(name: impl Into<String>, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            is_player: true,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn console() -> Self {
        Self {
            name: "Server".to_string(),
            is_player: false,
            tags: BTreeSet::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Decides whether a principal holds admin rights
pub trait Authorizer: Send + Sync {
    fn is_admin(&self, principal: &Principal) -> bool;
}

/// Grants admin to players carrying a specific tag
#[derive(Debug, Clone)]
pub struct TagAuthorizer {
    tag: String,
}

impl TagAuthorizer {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Authorizer for TagAuthorizer {
    fn is_admin(&self, principal: &Principal) -> bool {
        // The console has no tags but owns the server
        !principal.is_player || principal.has_tag(&self.tag)
    }
}
