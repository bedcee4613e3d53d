//! Wraps teloxide::Bot and implements [`memebot_core::Bot`]. Production code talks to Telegram;
//! tests substitute another Bot impl.
//!
//! Photo download goes through the raw Bot API (`getFile` then `file/bot<token>/<path>`) over the
//! adapter's own reqwest client, honoring a custom api url when one is set on the bot.

use async_trait::async_trait;
use memebot_core::{parse_message_id, Bot as CoreBot, Chat, MemebotError, Result};
use serde::Deserialize;
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ParseMode, ReplyParameters},
};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements memebot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
    http: reqwest::Client,
}

/// `getFile` response envelope (raw Bot API).
#[derive(Deserialize)]
struct GetFileResponse {
    ok: bool,
    result: Option<ApiFile>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct ApiFile {
    file_path: String,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self {
            bot,
            http: reqwest::Client::new(),
        }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }

    async fn get_file_path(&self, file_id: &str) -> Result<String> {
        let url = format!("{}bot{}/getFile", self.bot.api_url(), self.bot.token());
        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "file_id": file_id }))
            .send()
            .await
            .map_err(|e| MemebotError::Download(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(MemebotError::Download(format!(
                "getFile failed with HTTP {}",
                resp.status().as_u16()
            )));
        }
        let body: GetFileResponse = resp
            .json()
            .await
            .map_err(|e| MemebotError::Download(e.to_string()))?;
        match body.result {
            Some(file) if body.ok => Ok(file.file_path),
            _ => Err(MemebotError::Download(format!(
                "getFile rejected: {}",
                body.description.unwrap_or_else(|| "unknown".to_string())
            ))),
        }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| MemebotError::Telegram(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_parameters(ReplyParameters::new(MessageId(id)))
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| MemebotError::Telegram(e.to_string()))?;
        Ok(())
    }

    async fn download_photo(&self, file_id: &str) -> Result<Vec<u8>> {
        let file_path = self.get_file_path(file_id).await?;
        let url = format!(
            "{}file/bot{}/{}",
            self.bot.api_url(),
            self.bot.token(),
            file_path
        );
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| MemebotError::Download(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(MemebotError::Download(format!(
                "file download failed with HTTP {}",
                resp.status().as_u16()
            )));
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| MemebotError::Download(e.to_string()))?;
        debug!(file_id = %file_id, size = bytes.len(), "Downloaded photo");
        Ok(bytes.to_vec())
    }
}
