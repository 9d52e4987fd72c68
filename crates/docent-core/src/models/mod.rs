//! Shared data model: document chunks, provenance, and the answer shape
//! handed back to whatever boundary fronts the engine.

use serde::{Deserialize, Serialize};

/// Provenance metadata attached to a chunk by the ingestion pipeline.
///
/// Both fields are optional: loaders that cannot attribute a page (or even
/// a file) still produce searchable chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Originating file, e.g. `"policy_v1.pdf"`.
    pub source: Option<String>,
    /// Zero-based page number within the source, when known.
    pub page: Option<u32>,
}

/// A contiguous slice of a source document, embedded and stored for
/// retrieval. Immutable once persisted to the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// The chunk text. Identity for deduplication purposes: two chunks
    /// with equal content are the same passage regardless of metadata.
    pub content: String,
    pub metadata: ChunkMetadata,
}

impl DocumentChunk {
    pub fn new(content: impl Into<String>, metadata: ChunkMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// The `{source, page}` pair exposed to callers.
    pub fn source_ref(&self) -> SourceRef {
        SourceRef {
            source: self.metadata.source.clone(),
            page: self.metadata.page,
        }
    }
}

/// A citation entry in an [`Answer`]: where a supporting passage came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub source: Option<String>,
    pub page: Option<u32>,
}

/// The externally visible result of one question: the generated answer
/// plus the passages that were actually placed in the prompt, in prompt
/// order. `sources` is derived from `context` and kept in the same order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub sources: Vec<SourceRef>,
    /// The full chunks backing `sources`, for callers that want the text.
    pub context: Vec<DocumentChunk>,
}

impl Answer {
    /// Build an answer from the generated text and the chunks that were
    /// admitted into the prompt.
    pub fn new(answer: String, context: Vec<DocumentChunk>) -> Self {
        let sources = context.iter().map(DocumentChunk::source_ref).collect();
        Self {
            answer,
            sources,
            context,
        }
    }
}
