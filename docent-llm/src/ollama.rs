//! Ollama chat client.
//!
//! One system + user exchange per call against `/api/chat`, non-streaming,
//! with a fixed per-call timeout. A single failed call is definitive for the
//! request; there is no retry.

use std::time::Duration;

use docent_core::errors::{DocentResult, LlmError};
use docent_core::traits::IChatModel;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub struct OllamaChat {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Deserialize, Default)]
struct ChatReplyMessage {
    #[serde(default)]
    content: String,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    message: ChatReplyMessage,
}

impl OllamaChat {
    /// Create a chat client against the given Ollama base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Check that the Ollama server is reachable.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                debug!("Ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama unreachable");
                false
            }
        }
    }
}

#[async_trait::async_trait]
impl IChatModel for OllamaChat {
    async fn chat(
        &self,
        model: &str,
        system_prompt: &str,
        user_msg: &str,
        temperature: f32,
    ) -> DocentResult<String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_msg,
                },
            ],
            stream: false,
            options: ChatOptions { temperature },
        };

        debug!(model = %model, user_chars = user_msg.len(), "chat call");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::TransportFailed {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::UpstreamStatus { status, body }.into());
        }

        let reply: ChatReply = response.json().await.map_err(|e| LlmError::MalformedReply {
            reason: e.to_string(),
        })?;

        let content = reply.message.content.trim().to_string();
        if content.is_empty() {
            return Err(LlmError::EmptyReply {
                model: model.to_string(),
            }
            .into());
        }
        Ok(content)
    }
}
