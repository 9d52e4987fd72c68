//! Property tests for query expansion and aggregation folding.

use docent_core::models::{ChunkMetadata, DocumentChunk};
use docent_retrieval::aggregator::dedup_by_content;
use docent_retrieval::expansion::expand;
use proptest::prelude::*;

fn arb_chunk() -> impl Strategy<Value = DocumentChunk> {
    ("[a-e]{1,4}", "[a-z]{1,8}\\.pdf").prop_map(|(content, source)| {
        DocumentChunk::new(
            content,
            ChunkMetadata {
                source: Some(source),
                page: None,
            },
        )
    })
}

proptest! {
    #[test]
    fn expansion_is_deterministic(question in "[ -~]{0,40}") {
        prop_assert_eq!(expand(&question), expand(&question));
    }

    #[test]
    fn expansion_contains_original_first(question in "[ -~]{0,40}") {
        let queries = expand(&question);
        prop_assert!(!queries.is_empty());
        prop_assert_eq!(queries[0].as_str(), question.as_str());
    }

    #[test]
    fn expansion_has_no_duplicate_strings(question in "[ -~]{0,40}") {
        let queries = expand(&question);
        let unique: std::collections::HashSet<_> = queries.iter().collect();
        prop_assert_eq!(unique.len(), queries.len());
    }

    #[test]
    fn fold_never_exceeds_cap(
        candidates in prop::collection::vec(arb_chunk(), 0..30),
        cap in 0usize..10,
    ) {
        prop_assert!(dedup_by_content(candidates, cap).len() <= cap);
    }

    #[test]
    fn fold_output_has_unique_content(
        candidates in prop::collection::vec(arb_chunk(), 0..30),
        cap in 0usize..10,
    ) {
        let folded = dedup_by_content(candidates, cap);
        let unique: std::collections::HashSet<_> =
            folded.iter().map(|c| c.content.as_str()).collect();
        prop_assert_eq!(unique.len(), folded.len());
    }

    /// Each surviving chunk is the first candidate that carried its
    /// content, metadata included.
    #[test]
    fn fold_keeps_first_occurrence(
        candidates in prop::collection::vec(arb_chunk(), 0..30),
    ) {
        let folded = dedup_by_content(candidates.clone(), candidates.len());
        for kept in &folded {
            let first = candidates
                .iter()
                .find(|c| c.content == kept.content)
                .expect("kept chunk must come from candidates");
            prop_assert_eq!(&first.metadata, &kept.metadata);
        }
    }

    /// Folding preserves first-seen relative order.
    #[test]
    fn fold_preserves_order(
        candidates in prop::collection::vec(arb_chunk(), 0..30),
    ) {
        let folded = dedup_by_content(candidates.clone(), candidates.len());
        let mut last_index: Option<usize> = None;
        for kept in &folded {
            let index = candidates
                .iter()
                .position(|c| c.content == kept.content)
                .expect("kept chunk must come from candidates");
            if let Some(last) = last_index {
                prop_assert!(index > last);
            }
            last_index = Some(index);
        }
    }
}
