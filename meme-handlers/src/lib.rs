//! # meme-handlers
//!
//! Domain handlers for the meme explainer bot: the authorization gate, the mention-reply trigger
//! plus explanation flow, the `/start` and `/groupid` commands, and reply formatting.

pub mod auth;
pub mod commands;
pub mod explain;
pub mod format;
pub mod trigger;

pub use auth::{AllowedGroups, AuthHandler};
pub use commands::{GroupIdHandler, StartHandler};
pub use explain::MemeExplainHandler;
pub use format::markdown_to_telegram_html;
pub use trigger::{is_bot_mentioned, triggered_photo};
