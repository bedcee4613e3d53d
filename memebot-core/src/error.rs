use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemebotError {
    #[error("Telegram error: {0}")]
    Telegram(String),

    #[error("Download error: {0}")]
    Download(String),

    #[error("Handler error: {0}")]
    Handler(String),
}

pub type Result<T> = std::result::Result<T, MemebotError>;
