//! # docent-core
//!
//! Foundation crate for the Docent question-answering system.
//! Defines the shared models, errors, configuration, and the traits the
//! external collaborators (vector index, embedding provider, answer
//! generator) are reached through. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DocentConfig;
pub use errors::{DocentError, DocentResult};
pub use models::{Answer, ChunkMetadata, DocumentChunk, SourceRef};
pub use traits::{IAnswerGenerator, IEmbeddingProvider, IVectorIndex};
