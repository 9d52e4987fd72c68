//! Hashed term-frequency embedder.
//!
//! Produces deterministic fixed-dimension vectors by hashing terms into
//! signed buckets and weighting with sublinear term frequency. Far less
//! semantically rich than a neural model, but has no dependencies and
//! works offline, which makes it the default for tests and air-gapped
//! deployments.

use std::collections::HashMap;

use async_trait::async_trait;

use docent_core::errors::DocentResult;
use docent_core::traits::IEmbeddingProvider;

/// Deterministic hashing-trick embedder.
pub struct HashedTfIdf {
    dimensions: usize,
}

impl HashedTfIdf {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a over the term bytes. The low bits pick the bucket, one high
    /// bit picks the sign so colliding terms partially cancel instead of
    /// always reinforcing.
    fn term_slot(term: &str, dims: usize) -> (usize, f32) {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in term.as_bytes() {
            h ^= u64::from(*byte);
            h = h.wrapping_mul(0x0000_0100_0000_01b3);
        }
        let bucket = (h as usize) % dims;
        let sign = if h & (1 << 63) == 0 { 1.0 } else { -1.0 };
        (bucket, sign)
    }

    fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|term| term.len() >= 2)
            .map(str::to_lowercase)
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let mut counts: HashMap<String, f32> = HashMap::new();
        for term in Self::tokenize(text) {
            *counts.entry(term).or_default() += 1.0;
        }

        let mut vector = vec![0.0f32; self.dimensions];
        if counts.is_empty() {
            return vector;
        }

        for (term, count) in &counts {
            // Sublinear TF keeps a repeated term from dominating the vector.
            let weight = 1.0 + count.ln();
            let (bucket, sign) = Self::term_slot(term, self.dimensions);
            vector[bucket] += sign * weight;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }
}

#[async_trait]
impl IEmbeddingProvider for HashedTfIdf {
    async fn embed(&self, text: &str) -> DocentResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> DocentResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-tfidf"
    }
}
