//! OpenAI-compatible HTTP providers.
//!
//! One reqwest client per provider, built once and reused for the process
//! lifetime. Works against any endpoint speaking the OpenAI wire shape
//! (OpenAI itself, Ollama, llama.cpp, vLLM, ...); endpoints differ only
//! by base URL, model name, and API key.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use docent_core::config::{EmbeddingConfig, GenerationConfig};
use docent_core::errors::{DocentResult, ProviderError};
use docent_core::traits::{IAnswerGenerator, IEmbeddingProvider};

/// Resolve an API key: explicit config value first, then environment.
fn resolve_api_key(configured: &str) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    std::env::var("DOCENT_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .unwrap_or_default()
}

fn apply_auth(request: reqwest::RequestBuilder, api_key: &str) -> reqwest::RequestBuilder {
    if api_key.is_empty() {
        request
    } else {
        request.header("Authorization", format!("Bearer {api_key}"))
    }
}

async fn post_json(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    provider: &str,
    body: Value,
) -> DocentResult<Value> {
    let response = apply_auth(client.post(url), api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| ProviderError::Http {
            provider: provider.to_string(),
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ProviderError::Api {
            provider: provider.to_string(),
            status: status.as_u16(),
            message,
        }
        .into());
    }

    response.json().await.map_err(|e| {
        ProviderError::MalformedResponse {
            provider: provider.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// `/chat/completions` answer generator.
pub struct RemoteGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl RemoteGenerator {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: resolve_api_key(&config.api_key),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl IAnswerGenerator for RemoteGenerator {
    async fn generate(&self, prompt: &str) -> DocentResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": self.max_tokens,
        });

        debug!(model = %self.model, prompt_chars = prompt.chars().count(), "chat completion request");
        let response = post_json(&self.client, &url, &self.api_key, "remote-generator", body).await?;

        response["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                ProviderError::MalformedResponse {
                    provider: "remote-generator".to_string(),
                    reason: "missing choices[0].message.content".to_string(),
                }
                .into()
            })
    }

    fn name(&self) -> &str {
        "remote-generator"
    }
}

/// `/embeddings` embedding provider.
pub struct RemoteEmbedder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    dimensions: usize,
}

impl RemoteEmbedder {
    pub fn new(config: &EmbeddingConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: resolve_api_key(&config.api_key),
            model: config.model.clone(),
            dimensions: config.dimensions,
        }
    }

    async fn request(&self, inputs: &[&str]) -> DocentResult<Vec<Vec<f32>>> {
        let url = format!("{}/embeddings", self.base_url);
        let body = json!({
            "model": self.model,
            "input": inputs,
        });

        let response = post_json(&self.client, &url, &self.api_key, "remote-embedder", body).await?;

        let data = response["data"].as_array().ok_or_else(|| ProviderError::MalformedResponse {
            provider: "remote-embedder".to_string(),
            reason: "missing data array".to_string(),
        })?;

        let mut vectors = Vec::with_capacity(data.len());
        for item in data {
            let values = item["embedding"]
                .as_array()
                .ok_or_else(|| ProviderError::MalformedResponse {
                    provider: "remote-embedder".to_string(),
                    reason: "missing embedding array".to_string(),
                })?;
            vectors.push(
                values
                    .iter()
                    .map(|v| v.as_f64().unwrap_or(0.0) as f32)
                    .collect(),
            );
        }
        Ok(vectors)
    }
}

#[async_trait]
impl IEmbeddingProvider for RemoteEmbedder {
    async fn embed(&self, text: &str) -> DocentResult<Vec<f32>> {
        let mut vectors = self.request(&[text]).await?;
        vectors.pop().ok_or_else(|| {
            ProviderError::MalformedResponse {
                provider: "remote-embedder".to_string(),
                reason: "empty data array".to_string(),
            }
            .into()
        })
    }

    async fn embed_batch(&self, texts: &[String]) -> DocentResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let inputs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let vectors = self.request(&inputs).await?;
        if vectors.len() != texts.len() {
            return Err(ProviderError::MalformedResponse {
                provider: "remote-embedder".to_string(),
                reason: format!("expected {} embeddings, got {}", texts.len(), vectors.len()),
            }
            .into());
        }
        Ok(vectors)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "remote-embedder"
    }
}
