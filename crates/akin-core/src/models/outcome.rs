use serde::{Deserialize, Serialize};

/// Session state machine phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Asking,
    SoftConfirm,
    HardConfirm,
    RevealSuccess,
    /// Transient: a rejected reveal, immediately followed by `Asking`
    /// or `FailList`.
    RevealMiss,
    /// Waiting for the player to pick from the fail list.
    FailList,
    AlmostSuccess,
    NotInList,
}

impl SessionPhase {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::RevealSuccess | Self::AlmostSuccess | Self::NotInList
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asking => "asking",
            Self::SoftConfirm => "soft_confirm",
            Self::HardConfirm => "hard_confirm",
            Self::RevealSuccess => "reveal_success",
            Self::RevealMiss => "reveal_miss",
            Self::FailList => "fail_list",
            Self::AlmostSuccess => "almost_success",
            Self::NotInList => "not_in_list",
        }
    }
}

/// Final result of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Success { candidate_id: String },
    AlmostSuccess { candidate_id: String },
    NotInList,
}

impl Outcome {
    pub fn tag(&self) -> OutcomeTag {
        match self {
            Self::Success { .. } => OutcomeTag::Success,
            Self::AlmostSuccess { .. } => OutcomeTag::AlmostSuccess,
            Self::NotInList => OutcomeTag::NotInList,
        }
    }

    pub fn candidate_id(&self) -> Option<&str> {
        match self {
            Self::Success { candidate_id } | Self::AlmostSuccess { candidate_id } => {
                Some(candidate_id)
            }
            Self::NotInList => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeTag {
    Success,
    AlmostSuccess,
    NotInList,
}

impl OutcomeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::AlmostSuccess => "ALMOST_SUCCESS",
            Self::NotInList => "NOT_IN_LIST",
        }
    }
}
