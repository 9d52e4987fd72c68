//! # docent-session
//!
//! Conversational memory: a bounded ring of recent (question, answer)
//! turns per session, and a concurrent manager that owns one memory
//! instance per session. Memory is deliberately not a process-wide
//! singleton; every engine call names the session it belongs to.

pub mod manager;
pub mod memory;

pub use manager::SessionManager;
pub use memory::{ConversationMemory, Turn};
