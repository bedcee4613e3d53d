//! # memebot-core
//!
//! Core types and traits for the meme explainer bot: [`Bot`], [`Handler`], message and user
//! types, and tracing initialization. Transport-agnostic; used by memebot-telegram,
//! handler-chain, and meme-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{MemebotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage, ToCoreUser, User,
};
