/// Embedding-provider and answer-generator errors.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request to {provider} failed: {message}")]
    Http { provider: String, message: String },

    #[error("{provider} returned status {status}: {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("malformed response from {provider}: {reason}")]
    MalformedResponse { provider: String, reason: String },

    #[error("generation timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("unknown embedding provider: {name}")]
    UnknownProvider { name: String },
}
