//! Retrieval aggregation: fan expanded queries out to the vector index,
//! merge the hits, deduplicate by content, cap to the context budget.
//!
//! A failing query is isolated — logged and skipped — so one bad search
//! cannot abort the whole retrieval. Only when every query fails does the
//! aggregator raise an error.

use std::collections::HashSet;

use tracing::{debug, warn};

use docent_core::errors::{DocentResult, RetrievalError};
use docent_core::models::DocumentChunk;
use docent_core::traits::IVectorIndex;

/// Run each expanded query against the index with a per-query cap of `k`,
/// then fold the combined hits into an ordered, content-deduplicated set
/// of at most `k` chunks.
pub async fn retrieve(
    index: &dyn IVectorIndex,
    queries: &[String],
    k: usize,
) -> DocentResult<Vec<DocumentChunk>> {
    let mut candidates = Vec::new();
    let mut failures = 0usize;
    let mut last_error = None;

    for query in queries {
        match index.similarity_search(query, k).await {
            Ok(hits) => {
                debug!(query = %query, hits = hits.len(), "similarity search");
                candidates.extend(hits);
            }
            Err(error) => {
                warn!(query = %query, error = %error, "similarity search failed, continuing");
                failures += 1;
                last_error = Some(error);
            }
        }
    }

    if failures == queries.len() {
        if let Some(error) = last_error {
            return Err(RetrievalError::AllQueriesFailed {
                attempted: queries.len(),
                reason: error.to_string(),
            }
            .into());
        }
        // No queries at all: nothing searched, nothing found.
    }

    let deduplicated = dedup_by_content(candidates, k);
    debug!(retained = deduplicated.len(), cap = k, "aggregation complete");
    Ok(deduplicated)
}

/// Fold candidates into an ordered set keyed by exact content text.
///
/// First occurrence wins: earlier queries and earlier ranks take
/// precedence, so a duplicate passage keeps the metadata it was first
/// seen with. The result is truncated to `cap` entries.
pub fn dedup_by_content(candidates: Vec<DocumentChunk>, cap: usize) -> Vec<DocumentChunk> {
    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    let mut unique = Vec::new();

    for chunk in candidates {
        if unique.len() == cap {
            break;
        }
        if seen.insert(chunk.content.clone()) {
            unique.push(chunk);
        }
    }

    unique
}
