//! Default values for all configuration sections.

/// Conversation turns kept per session.
pub const DEFAULT_MAX_TURNS: usize = 3;

/// Seconds of inactivity before a session is eligible for eviction.
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 1800;

/// Passages retrieved per question (and per expanded query).
pub const DEFAULT_TOP_K: usize = 3;

/// Character cap on the assembled prompt.
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 12_000;

/// Upper bound on generated tokens per answer.
pub const DEFAULT_MAX_TOKENS: u32 = 256;

/// Seconds allowed for a single generator invocation.
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 60;

/// Default remote endpoint (OpenAI-compatible).
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default generation model.
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-4o-mini";

/// Default remote embedding model.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Dimensionality of the offline hashed embedder.
pub const DEFAULT_HASHED_DIMENSIONS: usize = 384;
