//! Integration tests: insert → search round trips through real SQLite
//! with the offline hashed embedder.

use std::sync::Arc;

use docent_core::models::{ChunkMetadata, DocumentChunk};
use docent_core::traits::IVectorIndex;
use docent_index::SqliteVectorIndex;
use docent_providers::HashedTfIdf;

fn chunk(content: &str, source: &str, page: u32) -> DocumentChunk {
    DocumentChunk::new(
        content,
        ChunkMetadata {
            source: Some(source.to_string()),
            page: Some(page),
        },
    )
}

fn test_index() -> SqliteVectorIndex {
    SqliteVectorIndex::open_in_memory(Arc::new(HashedTfIdf::new(256))).unwrap()
}

#[tokio::test]
async fn insert_and_count() {
    let index = test_index();
    let inserted = index
        .insert_chunks(&[
            chunk("Casual leave is 12 days per year", "policy.pdf", 1),
            chunk("Sick leave requires a medical certificate", "policy.pdf", 2),
        ])
        .await
        .unwrap();
    assert_eq!(inserted, 2);
    assert_eq!(index.chunk_count().unwrap(), 2);
}

#[tokio::test]
async fn search_returns_most_similar_first() {
    let index = test_index();
    index
        .insert_chunks(&[
            chunk("Casual leave is 12 days per year for all employees", "hr.pdf", 1),
            chunk("The cafeteria serves lunch between noon and two", "facilities.pdf", 3),
            chunk("Employees accrue casual leave days each calendar year", "hr.pdf", 2),
        ])
        .await
        .unwrap();

    let hits = index
        .similarity_search("how many casual leave days do employees get", 2)
        .await
        .unwrap();

    assert_eq!(hits.len(), 2);
    for hit in &hits {
        assert_eq!(hit.metadata.source.as_deref(), Some("hr.pdf"));
    }
}

#[tokio::test]
async fn search_caps_results_at_k() {
    let index = test_index();
    let chunks: Vec<_> = (0..10)
        .map(|i| chunk(&format!("leave policy clause number {i}"), "policy.pdf", i))
        .collect();
    index.insert_chunks(&chunks).await.unwrap();

    let hits = index.similarity_search("leave policy clause", 4).await.unwrap();
    assert_eq!(hits.len(), 4);
}

#[tokio::test]
async fn empty_index_returns_no_hits() {
    let index = test_index();
    let hits = index.similarity_search("anything", 5).await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn metadata_survives_round_trip() {
    let index = test_index();
    index
        .insert_chunks(&[chunk("Probation lasts six months", "handbook.docx", 7)])
        .await
        .unwrap();

    let hits = index.similarity_search("probation period length", 1).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].content, "Probation lasts six months");
    assert_eq!(hits[0].metadata.source.as_deref(), Some("handbook.docx"));
    assert_eq!(hits[0].metadata.page, Some(7));
}

#[tokio::test]
async fn index_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.db");

    {
        let index =
            SqliteVectorIndex::open(&path, Arc::new(HashedTfIdf::new(128))).unwrap();
        index
            .insert_chunks(&[chunk("Remote work needs manager approval", "remote.pdf", 1)])
            .await
            .unwrap();
    }

    let reopened = SqliteVectorIndex::open(&path, Arc::new(HashedTfIdf::new(128))).unwrap();
    assert_eq!(reopened.chunk_count().unwrap(), 1);
    let hits = reopened
        .similarity_search("remote work approval", 1)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].metadata.source.as_deref(), Some("remote.pdf"));
}

#[tokio::test]
async fn dimension_mismatch_on_insert_is_rejected() {
    // An index opened with one dimensionality must refuse vectors of
    // another. Simulate by swapping embedders between open and insert.
    struct WrongDims(HashedTfIdf);

    #[async_trait::async_trait]
    impl docent_core::traits::IEmbeddingProvider for WrongDims {
        async fn embed(&self, text: &str) -> docent_core::DocentResult<Vec<f32>> {
            self.0.embed(text).await
        }
        async fn embed_batch(
            &self,
            texts: &[String],
        ) -> docent_core::DocentResult<Vec<Vec<f32>>> {
            self.0.embed_batch(texts).await
        }
        fn dimensions(&self) -> usize {
            512 // claims 512, actually produces 128
        }
        fn name(&self) -> &str {
            "wrong-dims"
        }
    }

    let index =
        SqliteVectorIndex::open_in_memory(Arc::new(WrongDims(HashedTfIdf::new(128)))).unwrap();
    let err = index
        .insert_chunks(&[chunk("text", "s.pdf", 0)])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        docent_core::DocentError::Index(docent_core::errors::IndexError::DimensionMismatch { .. })
    ));
}
