//! The explanation flow: trigger check, photo download, vision call, threaded reply.

use async_trait::async_trait;
use memebot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use vision_client::VisionApi;

use crate::format::markdown_to_telegram_html;
use crate::trigger;

/// Fixed user-facing text when the download or the vision call fails.
const MSG_EXPLAIN_FAILED: &str = "Sorry, I could not explain that meme. Please try again later.";

/// Handler that answers a mention-reply to a photo with a vision-model explanation, threaded
/// onto the photo message. Non-triggering messages pass through untouched.
pub struct MemeExplainHandler {
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    vision: Arc<dyn VisionApi>,
    bot: Arc<dyn CoreBot>,
}

impl MemeExplainHandler {
    pub fn new(
        bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
        vision: Arc<dyn VisionApi>,
        bot: Arc<dyn CoreBot>,
    ) -> Self {
        Self {
            bot_username,
            vision,
            bot,
        }
    }

    async fn explain_and_reply(
        &self,
        message: &Message,
        parent_id: &str,
        file_id: &str,
    ) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            parent_id = %parent_id,
            file_id = %file_id,
            "Meme explanation triggered"
        );

        let image = match self.bot.download_photo(file_id).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, file_id = %file_id, "Failed to download photo");
                return self.send_fallback_and_stop(message, parent_id).await;
            }
        };

        let explanation = match self.vision.explain_image(&image).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "Vision request failed");
                return self.send_fallback_and_stop(message, parent_id).await;
            }
        };

        let html = markdown_to_telegram_html(&explanation);
        // A send failure is logged and dropped; there is no redelivery.
        if let Err(e) = self.bot.reply_to(&message.chat, parent_id, &html).await {
            error!(error = %e, chat_id = message.chat.id, "Failed to send explanation");
        } else {
            info!(
                chat_id = message.chat.id,
                parent_id = %parent_id,
                reply_len = html.len(),
                "Sent explanation"
            );
        }

        Ok(HandlerResponse::Stop)
    }

    async fn send_fallback_and_stop(
        &self,
        message: &Message,
        parent_id: &str,
    ) -> Result<HandlerResponse> {
        if let Err(e) = self
            .bot
            .reply_to(&message.chat, parent_id, MSG_EXPLAIN_FAILED)
            .await
        {
            error!(error = %e, chat_id = message.chat.id, "Failed to send fallback message");
        }
        Ok(HandlerResponse::Stop)
    }
}

#[async_trait]
impl Handler for MemeExplainHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let bot_username = self.bot_username.read().await.clone();
        let (parent_id, file_id) = match trigger::triggered_photo(message, bot_username.as_deref())
        {
            Some(hit) => hit,
            None => {
                debug!(
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    "Not a meme explanation trigger, ignoring"
                );
                return Ok(HandlerResponse::Continue);
            }
        };

        let parent_id = parent_id.to_string();
        let file_id = file_id.to_string();
        self.explain_and_reply(message, &parent_id, &file_id).await
    }
}
