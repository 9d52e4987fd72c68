//! SessionManager — concurrent per-session memory via DashMap.
//!
//! Sessions are created on first interaction and destroyed either
//! explicitly or by the idle-eviction sweep. Concurrent `record_turn` /
//! `context` calls on different sessions never contend; calls on the same
//! session serialize on its shard entry.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use docent_core::config::MemoryConfig;

use crate::memory::ConversationMemory;

struct SessionEntry {
    memory: ConversationMemory,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl SessionEntry {
    fn new(max_turns: usize) -> Self {
        let now = Utc::now();
        Self {
            memory: ConversationMemory::new(max_turns),
            created_at: now,
            last_activity: now,
        }
    }
}

/// Thread-safe owner of all live conversation memories.
pub struct SessionManager {
    sessions: DashMap<String, SessionEntry>,
    config: MemoryConfig,
}

impl SessionManager {
    pub fn new(config: MemoryConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Create a session with a fresh random ID and return the ID.
    pub fn create_session(&self) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.sessions
            .insert(session_id.clone(), SessionEntry::new(self.config.max_turns));
        debug!(session_id = %session_id, "session created");
        session_id
    }

    /// Record a completed (question, answer) turn, creating the session on
    /// first interaction.
    pub fn record_turn(&self, session_id: &str, question: &str, answer: &str) {
        let mut entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionEntry::new(self.config.max_turns));
        entry.memory.add(question, answer);
        entry.last_activity = Utc::now();
    }

    /// Render the conversation context for a session. A session that does
    /// not exist yet has, by definition, an empty context.
    pub fn context(&self, session_id: &str) -> String {
        self.sessions
            .get(session_id)
            .map(|entry| entry.memory.render_context())
            .unwrap_or_default()
    }

    /// Number of turns currently retained for a session.
    pub fn turn_count(&self, session_id: &str) -> usize {
        self.sessions
            .get(session_id)
            .map(|entry| entry.memory.len())
            .unwrap_or(0)
    }

    /// Explicitly end a session, dropping its memory.
    pub fn remove_session(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Drop sessions idle longer than the configured TTL. Returns the
    /// number of sessions removed.
    pub fn evict_idle(&self) -> usize {
        let cutoff = Utc::now() - chrono::Duration::seconds(self.config.idle_ttl_secs as i64);
        let mut evicted = 0usize;
        self.sessions.retain(|_, entry| {
            let keep = entry.last_activity > cutoff;
            if !keep {
                evicted += 1;
            }
            keep
        });
        if evicted > 0 {
            info!(evicted, remaining = self.sessions.len(), "idle sessions evicted");
        }
        evicted
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Age of a session, if it exists.
    pub fn session_age(&self, session_id: &str) -> Option<chrono::Duration> {
        self.sessions
            .get(session_id)
            .map(|entry| Utc::now() - entry.created_at)
    }
}
