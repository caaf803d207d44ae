use serde::{Deserialize, Serialize};

use super::defaults;

/// Generative model endpoint configuration (Ollama).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the Ollama server.
    pub base_url: String,
    /// Model used for answer generation and room classification.
    pub chat_model: String,
    /// Model used for the critic pass. Falls back to `chat_model` when unset.
    pub critic_model: Option<String>,
    /// Model used for embeddings (rooms and queries must share it).
    pub embed_model: String,
    /// Per-call timeout in seconds.
    pub request_timeout_secs: u64,
}

impl LlmConfig {
    /// Model identifier to use for the critic pass.
    pub fn critic_model(&self) -> &str {
        self.critic_model.as_deref().unwrap_or(&self.chat_model)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_OLLAMA_URL.to_string(),
            chat_model: defaults::DEFAULT_CHAT_MODEL.to_string(),
            critic_model: None,
            embed_model: defaults::DEFAULT_EMBED_MODEL.to_string(),
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
