//! Entry point: parse CLI, load config, init tracing, run the bot.

use anyhow::Result;
use clap::Parser;
use meme_explainer_bot::{load_config, run_bot, Cli, Commands};
use memebot_core::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            init_tracing(config.log_file.as_deref())?;
            run_bot(config).await
        }
    }
}
