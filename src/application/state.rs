//! # Session State
//!
//! Remembers the last list of search results shown to each session, so a bare
//! number in the next message can select from it. Held in memory only; a new
//! listing replaces the previous one.

use std::collections::HashMap;

use crate::domain::types::SearchResult;

/// Identity of a conversation: one sender in one room.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub room_id: String,
    pub sender: String,
}

impl SessionKey {
    pub fn new(room_id: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            sender: sender.into(),
        }
    }
}

/// Last results per session.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionKey, Vec<SearchResult>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever list the session had before.
    pub fn remember(&mut self, key: SessionKey, results: Vec<SearchResult>) {
        self.sessions.insert(key, results);
    }

    pub fn last_results(&self, key: &SessionKey) -> &[SearchResult] {
        self.sessions.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// The `number`-th (1-based) remembered result, if in range.
    pub fn select(&self, key: &SessionKey, number: usize) -> Option<&SearchResult> {
        let index = number.checked_sub(1)?;
        self.last_results(key).get(index)
    }
}
