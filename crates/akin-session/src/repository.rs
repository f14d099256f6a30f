//! In-memory session repository and play-history sink backed by `DashMap`.

use std::sync::Arc;

use akin_core::errors::StorageError;
use akin_core::models::{PlayRecord, Session};
use akin_core::traits::{PlayHistorySink, SessionRepository};
use dashmap::DashMap;

/// Thread-safe session store. Sessions are independent; each entry is
/// cloned in and out so no lock is held across a turn.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<DashMap<String, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// All stored session ids.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn load(&self, session_id: &str) -> Result<Option<Session>, StorageError> {
        Ok(self.sessions.get(session_id).map(|r| r.clone()))
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.sessions
            .insert(session.session_id.clone(), session.clone());
        Ok(())
    }

    fn remove(&self, session_id: &str) -> Result<Option<Session>, StorageError> {
        Ok(self.sessions.remove(session_id).map(|(_, v)| v))
    }
}

/// Play-history sink keeping one record per session id.
#[derive(Clone, Default)]
pub struct InMemoryPlayHistory {
    records: Arc<DashMap<String, PlayRecord>>,
}

impl InMemoryPlayHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session_id: &str) -> Option<PlayRecord> {
        self.records.get(session_id).map(|r| r.clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PlayHistorySink for InMemoryPlayHistory {
    fn record(&self, record: &PlayRecord) -> Result<(), StorageError> {
        self.records
            .insert(record.session_id.clone(), record.clone());
        Ok(())
    }
}
