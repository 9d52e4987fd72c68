//! Collaborator traits. The core never talks to an embedding model, a
//! vector store, or a language model directly — only through these.
//!
//! Handles implementing these traits are expected to be long-lived: built
//! once at startup and shared (`Arc`) across every question, not
//! reconstructed per call.

mod embedding;
mod generation;
mod index;

pub use embedding::IEmbeddingProvider;
pub use generation::IAnswerGenerator;
pub use index::IVectorIndex;
