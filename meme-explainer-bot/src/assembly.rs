//! Assembly: builds the teloxide bot, the vision client, and the handler chain, then runs the
//! polling loop.

use anyhow::Result;
use handler_chain::HandlerChain;
use meme_handlers::{AuthHandler, GroupIdHandler, MemeExplainHandler, StartHandler};
use memebot_core::Bot as CoreBot;
use memebot_telegram::{run_repl, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{error, info};
use vision_client::{mask_token, OpenAIVisionClient, VisionApi};

use crate::config::AppConfig;

/// Shared once-written cell holding the bot's own username (filled after get_me).
pub type BotUsername = Arc<tokio::sync::RwLock<Option<String>>>;

/// Builds the teloxide Bot from config, applying the api url override when set.
pub fn build_teloxide_bot(config: &AppConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(ref url_str) = config.telegram_api_url {
        match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        }
    } else {
        bot
    }
}

/// Builds the handler chain: commands first, then the authorization gate, then the explanation
/// flow. Split out from [`run_bot`] so tests can drive the same chain with mock collaborators.
pub fn build_handler_chain(
    config: &AppConfig,
    bot_username: BotUsername,
    bot: Arc<dyn CoreBot>,
) -> HandlerChain {
    let vision: Arc<dyn VisionApi> = Arc::new(
        OpenAIVisionClient::with_base_url(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
        )
        .with_model(config.vision_model.clone()),
    );

    HandlerChain::new()
        .add_handler(Arc::new(StartHandler::new(
            bot_username.clone(),
            bot.clone(),
        )))
        .add_handler(Arc::new(GroupIdHandler::new(
            bot_username.clone(),
            bot.clone(),
        )))
        .add_handler(Arc::new(AuthHandler::new(config.authorized_groups.clone())))
        .add_handler(Arc::new(MemeExplainHandler::new(bot_username, vision, bot)))
}

/// Runs the bot: wires the Telegram adapter into the chain and starts polling.
pub async fn run_bot(config: AppConfig) -> Result<()> {
    info!(
        api_key = %mask_token(&config.openai_api_key),
        model = %config.vision_model,
        base_url = %config.openai_base_url,
        "Vision client configured"
    );
    if config.authorized_groups.is_empty() {
        info!("Bot allowed in all groups (no restriction set)");
    } else {
        info!("Bot restricted to the configured authorized groups");
    }

    let teloxide_bot = build_teloxide_bot(&config);
    let bot_username: BotUsername = Arc::new(tokio::sync::RwLock::new(None));
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let chain = build_handler_chain(&config, bot_username.clone(), bot);

    run_repl(teloxide_bot, chain, bot_username).await
}
