//! Application configuration, loaded once from environment variables at startup.
//! Missing required values and malformed allow-lists are fatal here, before polling starts.

use anyhow::{Context, Result};
use meme_handlers::AllowedGroups;
use std::env;

pub struct AppConfig {
    pub bot_token: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub vision_model: String,
    /// Chats the bot explains memes in; empty set = all chats.
    pub authorized_groups: AllowedGroups,
    /// Optional Bot API base URL override (self-hosted gateway or mock server in tests).
    /// Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    /// If `token` is given it is used instead of TELEGRAM_BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN not set")?,
        };
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let vision_model = env::var("VISION_MODEL").unwrap_or_else(|_| "gpt-4.1".to_string());
        let authorized_groups =
            AllowedGroups::parse(&env::var("BOT_AUTHORIZED_GROUPS").unwrap_or_default())
                .context("Error parsing BOT_AUTHORIZED_GROUPS")?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();

        Ok(Self {
            bot_token,
            openai_api_key,
            openai_base_url,
            vision_model,
            authorized_groups,
            telegram_api_url,
            log_file,
        })
    }
}
