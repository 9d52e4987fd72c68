use async_trait::async_trait;

use crate::errors::DocentResult;

/// Embedding generation provider: text in, fixed-dimension vector out.
#[async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text.
    async fn embed(&self, text: &str) -> DocentResult<Vec<f32>>;

    /// Embed a batch of texts, one vector per input, in order.
    async fn embed_batch(&self, texts: &[String]) -> DocentResult<Vec<Vec<f32>>>;

    /// The dimensionality of vectors produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name, for logs.
    fn name(&self) -> &str;
}
