//! Session protocol errors.
//!
//! These are caller errors, reported distinctly from configuration errors.
//! An operation that returns one has not mutated the session.

use super::error_code::{self, AkinErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {id}")]
    NotFound { id: String },

    #[error("session {id} already reached a terminal state")]
    Terminated { id: String },

    #[error("session {id} has no pending question")]
    NoPendingQuestion { id: String },

    #[error("session {id} is not waiting for {expected}")]
    UnexpectedAction { id: String, expected: String },

    #[error("question references unknown feature: {key}")]
    UnknownFeature { key: String },

    #[error("question references unknown candidate: {id}")]
    UnknownCandidate { id: String },

    #[error("candidate {candidate_id} is not in the fail list")]
    NotInFailList { candidate_id: String },

    #[error("cannot start a session over an empty candidate set")]
    EmptyCandidateSet,

    #[error("unrecognised answer: {value}")]
    InvalidAnswer { value: String },
}

impl AkinErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Terminated { .. } => error_code::SESSION_TERMINATED,
            _ => error_code::SESSION_ERROR,
        }
    }
}
