//! # Vision client
//!
//! Defines the [`VisionApi`] trait and an OpenAI implementation that asks a vision model to
//! explain a meme image. One request per call, no retry; the caller decides what to do with a
//! failure.

use anyhow::Result;
use async_openai::{
    types::{
        ChatCompletionRequestMessageContentPartImageArgs,
        ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ImageDetail, ImageUrlArgs,
    },
    Client,
};
use async_trait::async_trait;
use base64::Engine as _;
use std::sync::Arc;
use tracing::info;

/// Fixed instruction sent with every image. The model reads the meme text, detects its language,
/// and answers in that language with the explanation only.
pub const EXPLAIN_INSTRUCTION: &str = "You are a meme explainer. Extract any text rendered in \
the image, detect its language, and give a concise explanation of the meme's meaning and humor \
in that same language. If the image contains no text, describe the image and explain the joke. \
You may use minimal Markdown emphasis (**bold** for key terms) and nothing else. Respond with \
the explanation only: do not state the language or repeat the extracted text.";

/// Vision request interface: one image in, one explanation text out.
#[async_trait]
pub trait VisionApi: Send + Sync {
    /// Returns the model's explanation for the given image bytes.
    async fn explain_image(&self, image: &[u8]) -> Result<String>;
}

/// OpenAI-backed [`VisionApi`] implementation.
#[derive(Clone)]
pub struct OpenAIVisionClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    model: String,
}

impl OpenAIVisionClient {
    pub fn new(api_key: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(config);
        Self {
            client: Arc::new(client),
            model: "gpt-4.1".to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        let client = Client::with_config(config);
        Self {
            client: Arc::new(client),
            model: "gpt-4.1".to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }
}

#[async_trait]
impl VisionApi for OpenAIVisionClient {
    async fn explain_image(&self, image: &[u8]) -> Result<String> {
        // Telegram photos are JPEG; pass them through unmodified as a data URL.
        let image_b64 = base64::engine::general_purpose::STANDARD.encode(image);
        let image_url = format!("data:image/jpeg;base64,{}", image_b64);

        info!(
            model = %self.model,
            image_bytes = image.len(),
            "OpenAI vision request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![ChatCompletionRequestUserMessageArgs::default()
                .content(vec![
                    ChatCompletionRequestMessageContentPartTextArgs::default()
                        .text(EXPLAIN_INSTRUCTION)
                        .build()?
                        .into(),
                    ChatCompletionRequestMessageContentPartImageArgs::default()
                        .image_url(
                            ImageUrlArgs::default()
                                .url(image_url)
                                .detail(ImageDetail::Auto)
                                .build()?,
                        )
                        .build()?
                        .into(),
                ])
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;

        if let Some(choice) = response.choices.first() {
            let content = choice.message.content.clone().unwrap_or_default();
            info!(reply_len = content.len(), "Received vision response");
            Ok(content)
        } else {
            anyhow::bail!("No response from OpenAI");
        }
    }
}

/// Masks an API key/token for safe logging: first 7 + "***" + last 4 chars;
/// values of length <= 11 are fully masked as "***".
pub fn mask_token(token: &str) -> String {
    if token.len() <= 11 {
        "***".to_string()
    } else {
        format!(
            "{}***{}",
            &token[..7],
            &token[token.len().saturating_sub(4)..]
        )
    }
}
