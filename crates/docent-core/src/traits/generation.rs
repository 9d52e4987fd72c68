use async_trait::async_trait;

use crate::errors::DocentResult;

/// Text-generation model invoked with a fully composed prompt.
///
/// Output length is bounded by the implementation's configured maximum
/// token count, not by the caller.
#[async_trait]
pub trait IAnswerGenerator: Send + Sync {
    /// Produce a completion for `prompt`.
    async fn generate(&self, prompt: &str) -> DocentResult<String>;

    /// Human-readable generator name, for logs.
    fn name(&self) -> &str;
}
