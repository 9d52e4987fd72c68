//! # docent-index
//!
//! SQLite-backed vector index. Chunk text and provenance live in a
//! `chunks` table, embeddings as little-endian f32 blobs alongside.
//! Search embeds the query through the injected provider and brute-force
//! scans cosine similarity — fine for corpora in the tens of thousands of
//! chunks this system targets.

mod codec;
mod index;

pub use index::SqliteVectorIndex;
