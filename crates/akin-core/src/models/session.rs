use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AiGate, Outcome, Question, QuestionRecord, SessionPhase};

/// Candidate id → strictly positive weight. Ordered by id.
pub type WeightVector = BTreeMap<String, f64>;

/// Candidate id → probability in [0, 1]. Ordered by id.
pub type ProbabilityVector = BTreeMap<String, f64>;

/// Per-play state. A plain value: the state machine mutates it, a
/// repository owns where it lives between turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub phase: SessionPhase,
    /// Questions answered so far.
    pub question_count: u32,
    pub history: Vec<QuestionRecord>,
    pub weights: WeightVector,
    pub ai_gate: AiGate,
    pub reveal_misses: u32,
    /// Question awaiting an answer, if any.
    pub pending: Option<Question>,
    /// Ordered candidate ids offered when the session gave up.
    pub fail_list: Vec<String>,
    pub outcome: Option<Outcome>,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(session_id: impl Into<String>, weights: WeightVector, ai_gate: AiGate) -> Self {
        Self {
            session_id: session_id.into(),
            phase: SessionPhase::Asking,
            question_count: 0,
            history: Vec::new(),
            weights,
            ai_gate,
            reveal_misses: 0,
            pending: None,
            fail_list: Vec::new(),
            outcome: None,
            started_at: Utc::now(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Whether a tag has already been asked, as explore or soft confirm.
    pub fn has_asked_tag(&self, key: &str) -> bool {
        self.history.iter().any(|r| r.question.tag() == Some(key))
    }

    pub fn last_record(&self) -> Option<&QuestionRecord> {
        self.history.last()
    }
}
