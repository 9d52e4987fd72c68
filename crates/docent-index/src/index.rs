//! SqliteVectorIndex — chunk persistence and k-NN similarity search.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{params, Connection};
use tracing::{debug, info};

use docent_core::errors::{DocentResult, IndexError};
use docent_core::models::{ChunkMetadata, DocumentChunk};
use docent_core::traits::{IEmbeddingProvider, IVectorIndex};

use crate::codec;

fn to_index_err(e: impl std::fmt::Display) -> IndexError {
    IndexError::sqlite(e.to_string())
}

/// SQLite-backed vector index over document chunks.
///
/// The embedding provider is injected once at construction and reused for
/// every insert and query; the index never rebuilds it per call. The
/// connection sits behind a mutex and is never held across an await.
pub struct SqliteVectorIndex {
    conn: Mutex<Connection>,
    embedder: Arc<dyn IEmbeddingProvider>,
}

impl SqliteVectorIndex {
    /// Open (or create) an index at `path`.
    pub fn open(
        path: impl AsRef<Path>,
        embedder: Arc<dyn IEmbeddingProvider>,
    ) -> DocentResult<Self> {
        let conn = Connection::open(path.as_ref()).map_err(to_index_err)?;
        Self::with_connection(conn, embedder)
    }

    /// Open an in-memory index (tests, scratch corpora).
    pub fn open_in_memory(embedder: Arc<dyn IEmbeddingProvider>) -> DocentResult<Self> {
        let conn = Connection::open_in_memory().map_err(to_index_err)?;
        Self::with_connection(conn, embedder)
    }

    fn with_connection(
        conn: Connection,
        embedder: Arc<dyn IEmbeddingProvider>,
    ) -> DocentResult<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS chunks (
                id INTEGER PRIMARY KEY,
                content TEXT NOT NULL,
                source TEXT,
                page INTEGER
            );
            CREATE TABLE IF NOT EXISTS chunk_embeddings (
                chunk_id INTEGER PRIMARY KEY REFERENCES chunks(id) ON DELETE CASCADE,
                dimensions INTEGER NOT NULL,
                embedding BLOB NOT NULL
            );",
        )
        .map_err(to_index_err)?;

        info!(embedder = embedder.name(), "vector index opened");
        Ok(Self {
            conn: Mutex::new(conn),
            embedder,
        })
    }

    fn lock_conn(&self) -> DocentResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| to_index_err(format!("connection lock poisoned: {e}")).into())
    }

    /// Embed and persist a batch of chunks. Returns the number inserted.
    pub async fn insert_chunks(&self, chunks: &[DocumentChunk]) -> DocentResult<usize> {
        if chunks.is_empty() {
            return Ok(0);
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;
        let expected = self.embedder.dimensions();
        for embedding in &embeddings {
            if embedding.len() != expected {
                return Err(IndexError::DimensionMismatch {
                    expected,
                    actual: embedding.len(),
                }
                .into());
            }
        }

        let mut conn = self.lock_conn()?;
        let tx = conn.transaction().map_err(to_index_err)?;
        for (chunk, embedding) in chunks.iter().zip(embeddings.iter()) {
            tx.execute(
                "INSERT INTO chunks (content, source, page) VALUES (?1, ?2, ?3)",
                params![chunk.content, chunk.metadata.source, chunk.metadata.page],
            )
            .map_err(to_index_err)?;
            let chunk_id = tx.last_insert_rowid();
            tx.execute(
                "INSERT INTO chunk_embeddings (chunk_id, dimensions, embedding)
                 VALUES (?1, ?2, ?3)",
                params![
                    chunk_id,
                    embedding.len() as i64,
                    codec::vector_to_blob(embedding)
                ],
            )
            .map_err(to_index_err)?;
        }
        tx.commit().map_err(to_index_err)?;

        debug!(inserted = chunks.len(), "chunks persisted");
        Ok(chunks.len())
    }

    /// Number of chunks stored.
    pub fn chunk_count(&self) -> DocentResult<usize> {
        let conn = self.lock_conn()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM chunks", [], |row| row.get(0))
            .map_err(to_index_err)?;
        Ok(count as usize)
    }

    /// Brute-force cosine scan against the stored embeddings.
    fn scan(&self, query_embedding: &[f32], k: usize) -> DocentResult<Vec<DocumentChunk>> {
        // Zero-norm query matches nothing.
        if query_embedding.iter().all(|x| *x == 0.0) {
            return Ok(Vec::new());
        }

        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT e.chunk_id, e.dimensions, e.embedding
                 FROM chunk_embeddings e",
            )
            .map_err(to_index_err)?;

        let rows = stmt
            .query_map([], |row| {
                let chunk_id: i64 = row.get(0)?;
                let dimensions: i64 = row.get(1)?;
                let blob: Vec<u8> = row.get(2)?;
                Ok((chunk_id, dimensions, blob))
            })
            .map_err(to_index_err)?;

        let mut scored: Vec<(i64, f64)> = Vec::new();
        for row in rows {
            let (chunk_id, dimensions, blob) = row.map_err(to_index_err)?;
            // Skip mismatched dimensions without decoding the blob.
            if dimensions as usize != query_embedding.len() {
                continue;
            }
            let stored = codec::blob_to_vector(&blob);
            let similarity = codec::cosine_similarity(query_embedding, &stored);
            scored.push((chunk_id, similarity));
        }

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        let mut results = Vec::with_capacity(scored.len());
        for (chunk_id, _similarity) in scored {
            let chunk = conn
                .query_row(
                    "SELECT content, source, page FROM chunks WHERE id = ?1",
                    params![chunk_id],
                    |row| {
                        Ok(DocumentChunk {
                            content: row.get(0)?,
                            metadata: ChunkMetadata {
                                source: row.get(1)?,
                                page: row.get(2)?,
                            },
                        })
                    },
                )
                .map_err(to_index_err)?;
            results.push(chunk);
        }
        Ok(results)
    }
}

#[async_trait]
impl IVectorIndex for SqliteVectorIndex {
    async fn similarity_search(&self, query: &str, k: usize) -> DocentResult<Vec<DocumentChunk>> {
        let query_embedding = self.embedder.embed(query).await?;
        let hits = self.scan(&query_embedding, k)?;
        debug!(query = %query, k, hits = hits.len(), "similarity search");
        Ok(hits)
    }
}
