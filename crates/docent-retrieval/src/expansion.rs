//! Query expansion: one question becomes several templated paraphrases
//! to widen recall against the index.
//!
//! Fully deterministic — no model calls, no randomness. The original
//! question always leads the list so its hits win rank ties downstream.

/// Paraphrase templates applied to the raw question, in emission order.
const TEMPLATES: [&str; 4] = [
    "rules for",
    "HR policy related to",
    "conditions for",
    "eligibility criteria for",
];

/// Expand a question into an ordered, duplicate-free query list.
///
/// Exact-duplicate strings are removed keeping the first occurrence; this
/// matters when the raw question already reads like a template's output.
pub fn expand(question: &str) -> Vec<String> {
    let mut queries = Vec::with_capacity(TEMPLATES.len() + 1);
    push_unique(&mut queries, question.to_string());
    for template in TEMPLATES {
        push_unique(&mut queries, format!("{template} {question}"));
    }
    queries
}

fn push_unique(queries: &mut Vec<String>, candidate: String) {
    if !queries.contains(&candidate) {
        queries.push(candidate);
    }
}
