//! Group allow-list and the authorization gate handler.

use async_trait::async_trait;
use memebot_core::{Handler, HandlerResponse, Message, Result};
use std::collections::HashSet;
use tracing::{info, instrument, warn};

/// Set of chat ids the bot may explain memes in. Empty means every group is allowed
/// (default-open; documented behavior). Parsed once at startup and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct AllowedGroups {
    groups: HashSet<i64>,
}

impl AllowedGroups {
    pub fn new(groups: impl IntoIterator<Item = i64>) -> Self {
        Self {
            groups: groups.into_iter().collect(),
        }
    }

    /// Parses a comma-separated list of chat ids. Blank input yields the empty (allow-all) set;
    /// a non-numeric entry is an error so a typo fails startup instead of silently opening up.
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        let mut groups = HashSet::new();
        for part in value.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let id: i64 = part.parse().map_err(|_| {
                anyhow::anyhow!("Invalid chat id in BOT_AUTHORIZED_GROUPS: {:?}", part)
            })?;
            groups.insert(id);
        }
        Ok(Self { groups })
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True when the chat may use the bot: empty set allows every chat, otherwise membership.
    pub fn is_authorized(&self, chat_id: i64) -> bool {
        self.groups.is_empty() || self.groups.contains(&chat_id)
    }
}

/// Stops the chain silently when the message comes from a chat outside the allow-list.
/// Placed after the command handlers: `/groupid` must work everywhere so operators can read the
/// id they need to put into the allow-list.
pub struct AuthHandler {
    allowed: AllowedGroups,
}

impl AuthHandler {
    pub fn new(allowed: AllowedGroups) -> Self {
        Self { allowed }
    }
}

#[async_trait]
impl Handler for AuthHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if self.allowed.is_authorized(message.chat.id) {
            info!(chat_id = message.chat.id, "Chat authorized");
            Ok(HandlerResponse::Continue)
        } else {
            // Not surfaced to the sender; the chain just ends here.
            warn!(
                chat_id = message.chat.id,
                "Message from unauthorized chat, ignoring"
            );
            Ok(HandlerResponse::Stop)
        }
    }
}
