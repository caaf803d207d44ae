//! Ollama embedding client.
//!
//! Batch-capable `/api/embed` calls. Vectors are L2-normalized here so that
//! every consumer can treat dot product as cosine similarity; rooms and
//! queries always go through this same model.

use std::time::Duration;

use docent_core::errors::{DocentResult, LlmError};
use docent_core::traits::IEmbeddingProvider;
use docent_core::vector::l2_normalize;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct OllamaEmbedder {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaEmbedder {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    async fn request_embeddings(&self, texts: &[String]) -> DocentResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/embed", self.base_url);
        let request = EmbedRequest {
            model: &self.model,
            input: texts,
        };

        debug!(model = %self.model, batch = texts.len(), "embed call");

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

        let resp: EmbedResponse = response.json().await.map_err(|e| LlmError::MalformedReply {
            reason: e.to_string(),
        })?;

        if resp.embeddings.len() != texts.len() {
            return Err(LlmError::MalformedReply {
                reason: format!(
                    "expected {} embeddings, got {}",
                    texts.len(),
                    resp.embeddings.len()
                ),
            }
            .into());
        }

        let mut embeddings = resp.embeddings;
        for v in &mut embeddings {
            l2_normalize(v);
        }
        Ok(embeddings)
    }
}

#[async_trait::async_trait]
impl IEmbeddingProvider for OllamaEmbedder {
    async fn embed(&self, text: &str) -> DocentResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()]).await?;
        results.into_iter().next().ok_or_else(|| {
            LlmError::MalformedReply {
                reason: "empty embedding response".to_string(),
            }
            .into()
        })
    }

    async fn embed_batch(&self, texts: &[String]) -> DocentResult<Vec<Vec<f32>>> {
        self.request_embeddings(texts).await
    }

    fn name(&self) -> &str {
        &self.model
    }
}
