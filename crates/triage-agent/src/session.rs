//! Bounded per-session conversation history.
//!
//! Each session keeps its most recent turns so the agent has limited memory
//! across calls. A session's history is read and replaced under a single
//! lock; calls within one session are expected to be sequential.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Turns kept per session before the oldest are evicted.
pub const MAX_HISTORY_TURNS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            at: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Debug)]
pub struct SessionHistory {
    max_turns: usize,
    sessions: Mutex<HashMap<String, Vec<Turn>>>,
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::with_max_turns(MAX_HISTORY_TURNS)
    }
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history keeping at most `max_turns` per session (at least one).
    pub fn with_max_turns(max_turns: usize) -> Self {
        Self {
            max_turns: max_turns.max(1),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Current turns for a session, oldest first.
    pub fn history(&self, session_id: &str) -> Vec<Turn> {
        self.lock().get(session_id).cloned().unwrap_or_default()
    }

    /// Appends turns to a session, evicts the oldest beyond the cap, and
    /// returns the stored history.
    pub fn record(&self, session_id: &str, turns: impl IntoIterator<Item = Turn>) -> Vec<Turn> {
        let mut sessions = self.lock();
        let mut history = sessions.remove(session_id).unwrap_or_default();
        history.extend(turns);
        let excess = history.len().saturating_sub(self.max_turns);
        if excess > 0 {
            history.drain(..excess);
            debug!(evicted = excess, "trimmed session history");
        }
        sessions.insert(session_id.to_string(), history.clone());
        history
    }

    /// Forgets a session. Returns whether it existed.
    pub fn clear(&self, session_id: &str) -> bool {
        self.lock().remove(session_id).is_some()
    }

    pub fn session_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Turn>>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_turns_are_evicted() {
        let history = SessionHistory::new();
        for i in 0..12 {
            history.record("s1", [Turn::user(format!("turn {i}"))]);
        }
        let turns = history.history("s1");
        assert_eq!(turns.len(), MAX_HISTORY_TURNS);
        assert_eq!(turns[0].content, "turn 2");
        assert_eq!(turns[9].content, "turn 11");
    }

    #[test]
    fn test_sessions_are_independent() {
        let history = SessionHistory::with_max_turns(2);
        history.record("a", [Turn::user("hi"), Turn::assistant("hello")]);
        history.record("b", [Turn::user("other")]);
        assert_eq!(history.history("a").len(), 2);
        assert_eq!(history.history("b").len(), 1);
        assert!(history.clear("a"));
        assert!(!history.clear("a"));
        assert!(history.history("a").is_empty());
        assert_eq!(history.session_count(), 1);
    }

    #[test]
    fn test_record_returns_stored_history() {
        let history = SessionHistory::with_max_turns(1);
        let stored = history.record("s", [Turn::user("one"), Turn::assistant("two")]);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].role, Role::Assistant);
    }
}
