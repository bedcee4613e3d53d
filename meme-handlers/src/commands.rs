//! `/start` and `/groupid` command handlers.
//!
//! Both run ahead of the authorization gate: `/groupid` exists so an operator can read a chat's
//! id before putting it on the allow-list.

use async_trait::async_trait;
use memebot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};

const MSG_GREETING: &str = "Hello! I explain memes. Mention me in a reply to a meme image!";

/// Returns true if `text` starts with the given command, bare (`/cmd`) or addressed to this bot
/// (`/cmd@botname`). A command addressed to a different bot does not match; the addressed form
/// never matches while the bot's own username is still unknown.
pub fn is_command(text: &str, command: &str, bot_username: Option<&str>) -> bool {
    let first = text.trim().split_whitespace().next().unwrap_or("");
    match first.strip_prefix(command) {
        Some("") => true,
        Some(rest) => match (rest.strip_prefix('@'), bot_username) {
            (Some(name), Some(username)) => name == username,
            _ => false,
        },
        None => false,
    }
}

/// Replies to `/start` with a short usage greeting.
pub struct StartHandler {
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    bot: Arc<dyn CoreBot>,
}

impl StartHandler {
    pub fn new(
        bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
        bot: Arc<dyn CoreBot>,
    ) -> Self {
        Self { bot_username, bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        if !is_command(&message.content, "/start", username.as_deref()) {
            return Ok(HandlerResponse::Continue);
        }
        info!(user_id = message.user.id, "Received /start command");
        if let Err(e) = self.bot.send_message(&message.chat, MSG_GREETING).await {
            error!(error = %e, chat_id = message.chat.id, "Failed to send greeting");
        }
        Ok(HandlerResponse::Stop)
    }
}

/// Replies to `/groupid` with the chat's numeric id, for populating BOT_AUTHORIZED_GROUPS.
pub struct GroupIdHandler {
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    bot: Arc<dyn CoreBot>,
}

impl GroupIdHandler {
    pub fn new(
        bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
        bot: Arc<dyn CoreBot>,
    ) -> Self {
        Self { bot_username, bot }
    }
}

#[async_trait]
impl Handler for GroupIdHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        if !is_command(&message.content, "/groupid", username.as_deref()) {
            return Ok(HandlerResponse::Continue);
        }
        info!(chat_id = message.chat.id, "Received /groupid command");
        let text = format!("This group's chat ID is: <code>{}</code>", message.chat.id);
        if let Err(e) = self.bot.reply_to(&message.chat, &message.id, &text).await {
            error!(error = %e, chat_id = message.chat.id, "Failed to send group id");
        }
        Ok(HandlerResponse::Stop)
    }
}
