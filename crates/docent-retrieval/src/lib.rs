//! # docent-retrieval
//!
//! The retrieval-augmentation pipeline:
//!
//! ```text
//! question → expansion → aggregation (index fan-out + dedup + cap)
//!          → composition (history + passages + constraints)
//!          → generation → session record
//! ```
//!
//! [`QaEngine`] sequences the stages; the expansion, aggregation, and
//! composition modules each stand alone and are individually testable.

pub mod aggregator;
pub mod composer;
pub mod engine;
pub mod expansion;

pub use composer::{ComposedPrompt, PromptComposer};
pub use engine::QaEngine;
