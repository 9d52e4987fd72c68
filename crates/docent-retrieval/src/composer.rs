//! Prompt composition: a fixed template with four regions — role
//! instruction, conversation history, answer constraints plus retrieved
//! passages, and the question.
//!
//! The composer also enforces the combined character budget: passages are
//! admitted whole, in retrieval order, until the assembled prompt would
//! exceed the budget. It reports which chunks made it in, so the answer's
//! cited sources match what the model actually saw.

use tracing::debug;

use docent_core::config::ComposerConfig;
use docent_core::models::DocumentChunk;

const PASSAGE_SEPARATOR: &str = "\n\n";

/// The assembled prompt plus the chunks admitted into it, in prompt order.
#[derive(Debug, Clone)]
pub struct ComposedPrompt {
    pub text: String,
    pub included: Vec<DocumentChunk>,
}

/// Assembles generation prompts under a character budget.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    max_prompt_chars: usize,
}

impl PromptComposer {
    pub fn new(config: &ComposerConfig) -> Self {
        Self {
            max_prompt_chars: config.max_prompt_chars,
        }
    }

    /// Compose a prompt from conversation history, retrieved chunks, and
    /// the question. Always yields a well-formed prompt — with zero
    /// admitted passages the context region is simply empty and the model
    /// is instructed to answer "I don't know".
    pub fn compose(
        &self,
        conversation_context: &str,
        chunks: &[DocumentChunk],
        question: &str,
    ) -> ComposedPrompt {
        let scaffold_chars = self
            .render(conversation_context, "", question)
            .chars()
            .count();

        let mut included = Vec::new();
        let mut context_chars = 0usize;
        for chunk in chunks {
            let separator_chars = if included.is_empty() {
                0
            } else {
                PASSAGE_SEPARATOR.len()
            };
            let passage_chars = chunk.content.chars().count();
            if scaffold_chars + context_chars + separator_chars + passage_chars
                > self.max_prompt_chars
            {
                break;
            }
            context_chars += separator_chars + passage_chars;
            included.push(chunk.clone());
        }

        if included.len() < chunks.len() {
            debug!(
                admitted = included.len(),
                retrieved = chunks.len(),
                budget = self.max_prompt_chars,
                "prompt budget trimmed retrieved passages"
            );
        }

        let context = included
            .iter()
            .map(|chunk| chunk.content.as_str())
            .collect::<Vec<_>>()
            .join(PASSAGE_SEPARATOR);

        ComposedPrompt {
            text: self.render(conversation_context, &context, question),
            included,
        }
    }

    fn render(&self, history: &str, context: &str, question: &str) -> String {
        format!(
            "You are an enterprise knowledge assistant.\n\
             \n\
             Conversation so far:\n\
             {history}\n\
             \n\
             Using ONLY the context below:\n\
             - Answer clearly and concisely\n\
             - Summarize in simple language\n\
             - Do NOT copy text verbatim\n\
             - If the answer is not present, say \"I don't know\"\n\
             \n\
             Context:\n\
             {context}\n\
             \n\
             Question:\n\
             {question}\n\
             \n\
             Answer:"
        )
    }
}
