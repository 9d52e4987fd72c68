//! QaEngine: sequences the full question-answering pipeline.
//!
//! expand → retrieve → read session context → compose → generate (with
//! timeout) → record turn → return answer + sources.
//!
//! Collaborators come in as long-lived `Arc` handles built once at
//! startup; the engine itself is cheap to share across tasks. Failures
//! propagate fail-fast — no retries, no fallback answers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::timeout;
use tracing::{debug, info};

use docent_core::config::DocentConfig;
use docent_core::errors::{DocentResult, ProviderError};
use docent_core::models::Answer;
use docent_core::traits::{IAnswerGenerator, IVectorIndex};
use docent_session::SessionManager;

use crate::aggregator;
use crate::composer::PromptComposer;
use crate::expansion;

/// The question-answering engine.
pub struct QaEngine {
    index: Arc<dyn IVectorIndex>,
    generator: Arc<dyn IAnswerGenerator>,
    sessions: Arc<SessionManager>,
    composer: PromptComposer,
    top_k: usize,
    generation_timeout: Duration,
}

impl QaEngine {
    pub fn new(
        config: &DocentConfig,
        index: Arc<dyn IVectorIndex>,
        generator: Arc<dyn IAnswerGenerator>,
        sessions: Arc<SessionManager>,
    ) -> Self {
        Self {
            index,
            generator,
            sessions,
            composer: PromptComposer::new(&config.composer),
            top_k: config.retrieval.top_k,
            generation_timeout: Duration::from_secs(config.generation.timeout_secs),
        }
    }

    /// Answer a question within a session, with the configured context
    /// budget `top_k`.
    pub async fn ask(&self, session_id: &str, question: &str) -> DocentResult<Answer> {
        self.ask_with_k(session_id, question, self.top_k).await
    }

    /// Answer a question with an explicit per-call context budget.
    pub async fn ask_with_k(
        &self,
        session_id: &str,
        question: &str,
        k: usize,
    ) -> DocentResult<Answer> {
        let queries = expansion::expand(question);
        debug!(queries = queries.len(), "question expanded");

        let chunks = aggregator::retrieve(self.index.as_ref(), &queries, k).await?;

        let conversation_context = self.sessions.context(session_id);
        let composed = self
            .composer
            .compose(&conversation_context, &chunks, question);

        let started = Instant::now();
        let answer_text = timeout(self.generation_timeout, self.generator.generate(&composed.text))
            .await
            .map_err(|_| ProviderError::Timeout {
                seconds: self.generation_timeout.as_secs(),
            })??;

        info!(
            session_id = %session_id,
            generator = self.generator.name(),
            sources = composed.included.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "answer generated"
        );

        self.sessions.record_turn(session_id, question, &answer_text);

        Ok(Answer::new(answer_text, composed.included))
    }

    /// The session manager this engine records turns into.
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}
