//! ConversationMemory — a FIFO-bounded ring of conversation turns.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// One (question, answer) exchange. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub question: String,
    pub answer: String,
}

/// Ordered turns bounded by `max_turns`; the oldest turn is evicted first
/// when the bound is exceeded. Bounding is by turn count, not tokens —
/// the overall prompt budget is enforced downstream at composition time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMemory {
    max_turns: usize,
    turns: VecDeque<Turn>,
}

impl ConversationMemory {
    pub fn new(max_turns: usize) -> Self {
        Self {
            max_turns,
            turns: VecDeque::with_capacity(max_turns),
        }
    }

    /// Record a completed turn. Always succeeds; evicts oldest turns until
    /// the bound holds again.
    pub fn add(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.turns.push_back(Turn {
            question: question.into(),
            answer: answer.into(),
        });
        while self.turns.len() > self.max_turns {
            self.turns.pop_front();
        }
    }

    /// Render the retained turns as a linear text block, oldest first:
    /// alternating `User:` / `Assistant:` lines. Empty string when no
    /// turns exist.
    pub fn render_context(&self) -> String {
        let mut context = String::new();
        for turn in &self.turns {
            context.push_str("User: ");
            context.push_str(&turn.question);
            context.push('\n');
            context.push_str("Assistant: ");
            context.push_str(&turn.answer);
            context.push('\n');
        }
        context
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Retained turns, oldest first.
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }
}
