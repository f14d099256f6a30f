use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AiGate, OutcomeTag, Session};
use crate::errors::StorageError;

/// Terminal play-history record, written once per finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub session_id: String,
    pub outcome: OutcomeTag,
    pub question_count: u32,
    /// JSON-encoded question history.
    pub history_json: String,
    pub ai_gate: AiGate,
    pub candidate_id: Option<String>,
    pub finished_at: DateTime<Utc>,
}

impl PlayRecord {
    /// Build the record for a session. Returns `None` while the session
    /// has no outcome.
    pub fn from_session(session: &Session) -> Result<Option<Self>, StorageError> {
        let Some(outcome) = session.outcome.as_ref() else {
            return Ok(None);
        };
        let history_json =
            serde_json::to_string(&session.history).map_err(|e| StorageError::Serialization {
                reason: e.to_string(),
            })?;
        Ok(Some(Self {
            session_id: session.session_id.clone(),
            outcome: outcome.tag(),
            question_count: session.question_count,
            history_json,
            ai_gate: session.ai_gate,
            candidate_id: outcome.candidate_id().map(str::to_string),
            finished_at: Utc::now(),
        }))
    }
}
