use akin_core::models::{Outcome, Question, SessionPhase};
use akin_scoring::Belief;
use serde::Serialize;

use crate::explain::MatchedFeature;

/// What the client sees after a turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Turn {
    /// Next question, with the belief it was chosen from.
    Ask {
        question: Question,
        phase: SessionPhase,
        belief: Belief,
    },
    /// The session gave up; the player may pick from these ids.
    FailList { candidates: Vec<String> },
    Finished {
        outcome: Outcome,
        /// Tag answers that agreed with the identified candidate.
        explanation: Vec<MatchedFeature>,
    },
}

impl Turn {
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Ask { question, .. } => Some(question),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}
