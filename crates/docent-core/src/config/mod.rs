//! Configuration. One struct per subsystem, each with serde defaults so a
//! partial TOML file (or none at all) yields a working setup.

pub mod defaults;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DocentError, DocentResult};

/// Conversation memory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Bound on turns kept per session; oldest turns are evicted first.
    pub max_turns: usize,
    /// Sessions idle longer than this are removed by the eviction sweep.
    pub idle_ttl_secs: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_turns: defaults::DEFAULT_MAX_TURNS,
            idle_ttl_secs: defaults::DEFAULT_SESSION_IDLE_TTL_SECS,
        }
    }
}

/// Retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Per-query hit cap, and the cap on the final deduplicated set.
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
        }
    }
}

/// Prompt composition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Combined character budget for the assembled prompt. Passages are
    /// admitted whole, in retrieval order, until the budget is reached.
    pub max_prompt_chars: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: defaults::DEFAULT_MAX_PROMPT_CHARS,
        }
    }
}

/// Answer generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// OpenAI-compatible endpoint base, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    pub model: String,
    /// API key; falls back to `DOCENT_API_KEY` / `OPENAI_API_KEY` when empty.
    pub api_key: String,
    /// Upper bound on generated tokens per answer.
    pub max_tokens: u32,
    /// Wall-clock cap on a single generator invocation.
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            api_key: String::new(),
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
        }
    }
}

/// Embedding provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// `"hashed"` for the offline term-frequency embedder, `"remote"` for
    /// the OpenAI-compatible endpoint.
    pub provider: String,
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    /// Dimensionality of the hashed embedder (ignored for remote).
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "hashed".to_string(),
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            api_key: String::new(),
            dimensions: defaults::DEFAULT_HASHED_DIMENSIONS,
        }
    }
}

/// Vector index settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// SQLite database path. `None` means in-memory (tests, scratch use).
    pub path: Option<std::path::PathBuf>,
}

/// Top-level configuration, loadable from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocentConfig {
    pub memory: MemoryConfig,
    pub retrieval: RetrievalConfig,
    pub composer: ComposerConfig,
    pub generation: GenerationConfig,
    pub embedding: EmbeddingConfig,
    pub index: IndexConfig,
}

impl DocentConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> DocentResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DocentError::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(raw: &str) -> DocentResult<Self> {
        toml::from_str(raw).map_err(|e| DocentError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = DocentConfig::from_toml_str("").unwrap();
        assert_eq!(config.memory.max_turns, defaults::DEFAULT_MAX_TURNS);
        assert_eq!(config.retrieval.top_k, defaults::DEFAULT_TOP_K);
        assert_eq!(config.embedding.provider, "hashed");
        assert!(config.index.path.is_none());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = DocentConfig::from_toml_str(
            r#"
            [memory]
            max_turns = 5

            [generation]
            model = "llama-3.1-8b"
            "#,
        )
        .unwrap();
        assert_eq!(config.memory.max_turns, 5);
        assert_eq!(
            config.memory.idle_ttl_secs,
            defaults::DEFAULT_SESSION_IDLE_TTL_SECS
        );
        assert_eq!(config.generation.model, "llama-3.1-8b");
        assert_eq!(config.generation.max_tokens, defaults::DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = DocentConfig::from_toml_str("memory = 3").unwrap_err();
        assert!(matches!(err, DocentError::Config { .. }));
    }
}
