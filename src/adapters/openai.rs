//! OpenAI-compatible chat-completions client. Non-streaming, single choice.
//!
//! The bearer credential is held by the struct, never read from ambient process
//! state, so tests can construct the adapter against a mock server.

use crate::domain::model::CompletionProfile;
use crate::domain::ports::CompletionService;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// OpenAI-compatible request/response shapes
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    n: u32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageBody,
}

#[derive(Deserialize)]
struct ChatMessageBody {
    content: Option<String>,
}

pub struct OpenAiCompletion {
    api_base: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiCompletion {
    pub fn new(api_base: &str, api_key: &str, timeout_seconds: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
            client,
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiCompletion {
    async fn complete(&self, prompt: &str, profile: &CompletionProfile) -> Result<String> {
        let request = ChatRequest {
            model: &profile.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: profile.temperature,
            max_tokens: profile.max_tokens,
            n: 1,
            stream: false,
        };

        let url = format!("{}/chat/completions", self.api_base);
        tracing::debug!("📡 Completion request to {} (model: {})", url, profile.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("📡 Completion response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("📡 Upstream error {}: {}", status, body);
            return Err(RelayError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;

        // 空字串留給上層以預設值處理，缺少欄位才算格式錯誤
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| RelayError::MalformedResponseError {
                message: "no message content in completion choices".to_string(),
            })?;

        Ok(content.trim().to_string())
    }
}
