//! Polling runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//! Calls get_me before polling to populate the bot_username cell used by mention detection.

use anyhow::Result;
use handler_chain::HandlerChain;
use memebot_core::ToCoreMessage;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::adapters::TelegramMessageWrapper;

/// Starts long polling with the given teloxide Bot, HandlerChain, and bot_username cell.
/// Calls get_me() before starting and writes the username into bot_username; each message is
/// converted to core::Message and passed to chain.handle (spawned per message).
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            *bot_username.write().await = Some(username.clone());
            info!(username = %username, "Bot username set before repl");
        }
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let wrapper = TelegramMessageWrapper(&msg);
            let core_msg = wrapper.to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_type = %core_msg.message_type,
                has_reply = core_msg.reply_to_message_id.is_some(),
                "Received message"
            );

            // Run handler chain in a spawned task so polling returns immediately; a handler
            // error is contained here and never stops the repl.
            let chain_for_task = chain.clone();
            tokio::spawn(async move {
                if let Err(e) = chain_for_task.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
