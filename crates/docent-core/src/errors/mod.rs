//! Error taxonomy. One enum per subsystem, aggregated into [`DocentError`].
//!
//! Propagation policy is fail-fast: no retries anywhere in the core, no
//! fallback answers. A collaborator failure surfaces to the caller of the
//! engine unrecovered; mapping it to a transport response is the
//! boundary's job.

mod index_error;
mod provider_error;
mod retrieval_error;

pub use index_error::IndexError;
pub use provider_error::ProviderError;
pub use retrieval_error::RetrievalError;

/// Result type alias used across the workspace.
pub type DocentResult<T> = std::result::Result<T, DocentError>;

/// Top-level error for all Docent operations.
#[derive(Debug, thiserror::Error)]
pub enum DocentError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("config error: {message}")]
    Config { message: String },
}

impl DocentError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
