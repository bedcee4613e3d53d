//! Bot abstraction for sending messages and fetching photo attachments.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in memebot-telegram.
//! Tests substitute their own impl.

use crate::error::{MemebotError, Result};
use crate::types::Chat;
use async_trait::async_trait;

/// Abstraction over the chat transport: plain sends, threaded replies, photo download.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain-text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends `text` as a threaded reply to `message_id` in `chat`. `text` may use the
    /// Telegram HTML subset (b/i/code); `message_id` is the transport id (numeric string).
    async fn reply_to(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;
    /// Downloads the photo with the given file id and returns its bytes.
    async fn download_photo(&self, file_id: &str) -> Result<Vec<u8>>;
}

/// Parses a message id string into an i32. Used when addressing replies.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| MemebotError::Telegram(format!("Invalid message_id for reply: {}", s)))
}
