use crate::errors::DocentResult;

/// Text embedding encoder.
///
/// Rooms and queries must be embedded by the same model/version, and every
/// returned vector must be L2-normalized so that dot product equals cosine
/// similarity.
#[async_trait::async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text.
    async fn embed(&self, text: &str) -> DocentResult<Vec<f32>>;

    /// Embed a batch of texts, preserving order.
    async fn embed_batch(&self, texts: &[String]) -> DocentResult<Vec<Vec<f32>>>;

    /// Model identifier, for logging.
    fn name(&self) -> &str;
}
