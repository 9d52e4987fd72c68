//! # docent-providers
//!
//! Concrete collaborators behind the core's traits:
//!
//! - [`HashedTfIdf`] — deterministic offline embedder. No model files, no
//!   network; always available.
//! - [`RemoteEmbedder`] / [`RemoteGenerator`] — OpenAI-compatible HTTP
//!   clients for `/embeddings` and `/chat/completions`.

pub mod hashed;
pub mod remote;

use std::sync::Arc;

use docent_core::config::EmbeddingConfig;
use docent_core::errors::{DocentResult, ProviderError};
use docent_core::traits::IEmbeddingProvider;

pub use hashed::HashedTfIdf;
pub use remote::{RemoteEmbedder, RemoteGenerator};

/// Build the embedding provider named in configuration.
pub fn create_embedding_provider(
    config: &EmbeddingConfig,
) -> DocentResult<Arc<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "hashed" => Ok(Arc::new(HashedTfIdf::new(config.dimensions))),
        "remote" => Ok(Arc::new(RemoteEmbedder::new(config))),
        other => Err(ProviderError::UnknownProvider {
            name: other.to_string(),
        }
        .into()),
    }
}
