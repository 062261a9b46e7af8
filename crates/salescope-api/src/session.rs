//! In-memory conversation session store.
//!
//! Maps session-id strings to ordered logs of role-tagged turns. State is
//! process-lifetime: lost on restart, never trimmed, unbounded. That is
//! deliberate; the explicit abstraction keeps callers unchanged if a
//! bound or expiry policy is added later.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// One role-tagged turn in a conversation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
    /// Responder tag, present on assistant turns.
    pub agent_type: Option<String>,
}

/// Concurrency-safe keyed store of conversation logs.
///
/// A single map-wide lock serializes access, so the two-turn append of a
/// request is atomic with respect to concurrent requests on the same
/// session id. Disjoint session ids never conflict on anything but the
/// lock itself.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Vec<TurnRecord>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a log exists for the session id.
    pub fn get_or_create(&self, session_id: &str) {
        let mut sessions = self.lock();
        sessions.entry(session_id.to_string()).or_default();
    }

    /// Append a user turn and the matching assistant turn in one step.
    ///
    /// Both turns land under a single lock acquisition, so no interleaved
    /// append from another request can split the pair.
    pub fn append_exchange(
        &self,
        session_id: &str,
        user_message: &str,
        assistant_message: &str,
        agent_type: &str,
    ) {
        let mut sessions = self.lock();
        let log = sessions.entry(session_id.to_string()).or_default();
        log.push(TurnRecord {
            role: "user".to_string(),
            content: user_message.to_string(),
            agent_type: None,
        });
        log.push(TurnRecord {
            role: "assistant".to_string(),
            content: assistant_message.to_string(),
            agent_type: Some(agent_type.to_string()),
        });
    }

    /// The turns of a session, or None if the id has never been seen.
    pub fn turns(&self, session_id: &str) -> Option<Vec<TurnRecord>> {
        self.lock().get(session_id).cloned()
    }

    /// Number of turns in a session (0 if unknown).
    pub fn turn_count(&self, session_id: &str) -> usize {
        self.lock().get(session_id).map_or(0, Vec::len)
    }

    /// Number of known sessions.
    pub fn session_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<TurnRecord>>> {
        // A poisoned lock only means another thread panicked mid-append;
        // the map itself is still usable.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Tests
// =============================================================================
