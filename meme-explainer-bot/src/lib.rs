//! # meme_explainer_bot
//!
//! Application crate: CLI, env configuration, and assembly of the handler chain.
//! The binary entry point is `src/main.rs`; tests reuse [`assembly::build_handler_chain`].

pub mod assembly;
pub mod cli;
pub mod config;

pub use assembly::{build_handler_chain, build_teloxide_bot, run_bot};
pub use cli::{load_config, Cli, Commands};
pub use config::AppConfig;
