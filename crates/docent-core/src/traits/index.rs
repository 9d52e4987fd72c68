use async_trait::async_trait;

use crate::errors::DocentResult;
use crate::models::DocumentChunk;

/// K-nearest-neighbor search over embedded document chunks.
///
/// The index owns embedding of the query text; callers never see vectors.
#[async_trait]
pub trait IVectorIndex: Send + Sync {
    /// Return up to `k` chunks most similar to `query`, best first.
    /// Zero hits is a valid, non-error outcome.
    async fn similarity_search(&self, query: &str, k: usize) -> DocentResult<Vec<DocumentChunk>>;
}
