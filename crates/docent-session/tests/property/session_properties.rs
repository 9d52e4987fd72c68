//! Property tests for conversation memory bounds and rendering.

use docent_session::ConversationMemory;
use proptest::prelude::*;

proptest! {
    /// After any add sequence, memory retains exactly the last
    /// min(max_turns, adds) turns, in chronological order.
    #[test]
    fn retains_exactly_last_n_turns(
        max_turns in 0usize..8,
        turns in prop::collection::vec(("[a-z]{1,12}", "[a-z]{1,12}"), 0..20),
    ) {
        let mut memory = ConversationMemory::new(max_turns);
        for (q, a) in &turns {
            memory.add(q.clone(), a.clone());
        }

        let expected: Vec<_> = turns
            .iter()
            .rev()
            .take(max_turns)
            .rev()
            .collect();
        prop_assert_eq!(memory.len(), expected.len());

        let retained: Vec<_> = memory
            .turns()
            .map(|t| (t.question.clone(), t.answer.clone()))
            .collect();
        for (got, want) in retained.iter().zip(expected.iter()) {
            prop_assert_eq!(&got.0, &want.0);
            prop_assert_eq!(&got.1, &want.1);
        }
    }

    /// Rendered context is line-structured: one User line and one
    /// Assistant line per retained turn, in order.
    #[test]
    fn rendered_context_alternates_roles(
        turns in prop::collection::vec(("[a-z]{1,12}", "[a-z]{1,12}"), 1..10),
    ) {
        let mut memory = ConversationMemory::new(turns.len());
        for (q, a) in &turns {
            memory.add(q.clone(), a.clone());
        }

        let context = memory.render_context();
        let lines: Vec<&str> = context.lines().collect();
        prop_assert_eq!(lines.len(), turns.len() * 2);
        for (i, line) in lines.iter().enumerate() {
            if i % 2 == 0 {
                prop_assert!(line.starts_with("User: "));
            } else {
                prop_assert!(line.starts_with("Assistant: "));
            }
        }
    }

    /// The bound is an invariant, not just a final state: it holds after
    /// every single add.
    #[test]
    fn bound_holds_after_every_add(
        max_turns in 0usize..6,
        turns in prop::collection::vec(("[a-z]{1,8}", "[a-z]{1,8}"), 0..15),
    ) {
        let mut memory = ConversationMemory::new(max_turns);
        for (q, a) in &turns {
            memory.add(q.clone(), a.clone());
            prop_assert!(memory.len() <= max_turns);
        }
    }
}
