//! Mock implementation of [`memebot_core::Bot`] for handler tests.
//!
//! Records send/reply/download calls so tests can assert on outbound traffic without hitting
//! Telegram.

use async_trait::async_trait;
use memebot_core::{Bot, Chat, MemebotError, Result};
use std::sync::{Arc, Mutex};

/// One recorded outbound message. `reply_to_id` is None for plain sends.
#[derive(Debug, Clone)]
pub struct SentRecord {
    pub chat_id: i64,
    pub reply_to_id: Option<String>,
    pub text: String,
}

/// Mock Bot that records every call. `photo_bytes` is returned from `download_photo`; a mock
/// built with `failing_download` errors there instead.
pub struct MockBot {
    pub sent: Arc<Mutex<Vec<SentRecord>>>,
    pub downloads: Arc<Mutex<Vec<String>>>,
    photo_bytes: Vec<u8>,
    fail_download: bool,
}

impl MockBot {
    pub fn new(photo_bytes: Vec<u8>) -> Arc<Self> {
        Arc::new(Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            downloads: Arc::new(Mutex::new(Vec::new())),
            photo_bytes,
            fail_download: false,
        })
    }

    pub fn failing_download() -> Arc<Self> {
        Arc::new(Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            downloads: Arc::new(Mutex::new(Vec::new())),
            photo_bytes: Vec::new(),
            fail_download: true,
        })
    }

    pub fn sent_messages(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn downloaded_file_ids(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            reply_to_id: None,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            reply_to_id: Some(message_id.to_string()),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn download_photo(&self, file_id: &str) -> Result<Vec<u8>> {
        self.downloads.lock().unwrap().push(file_id.to_string());
        if self.fail_download {
            return Err(MemebotError::Download("mock download failure".to_string()));
        }
        Ok(self.photo_bytes.clone())
    }
}
