use serde::{Deserialize, Serialize};

use super::Answer;

/// Coarse question kind, used by the forced-index policy and by history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    ExploreTag,
    SoftConfirm,
    HardConfirm,
}

impl QuestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExploreTag => "explore_tag",
            Self::SoftConfirm => "soft_confirm",
            Self::HardConfirm => "hard_confirm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    TitleInitial,
    Author,
}

/// Identity probe used by a hard confirm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HardConfirmProbe {
    /// Normalized leading character of the title.
    TitleInitial { value: String },
    Author { value: String },
}

impl HardConfirmProbe {
    pub fn kind(&self) -> ProbeKind {
        match self {
            Self::TitleInitial { .. } => ProbeKind::TitleInitial,
            Self::Author { .. } => ProbeKind::Author,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::TitleInitial { value } | Self::Author { value } => value,
        }
    }
}

/// A question put to the player. Each kind carries exactly the fields it
/// needs, so e.g. a hard confirm without a probe cannot be built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    ExploreTag {
        tag: String,
    },
    SoftConfirm {
        tag: String,
        candidate_id: String,
    },
    HardConfirm {
        candidate_id: String,
        probe: HardConfirmProbe,
    },
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::ExploreTag { .. } => QuestionKind::ExploreTag,
            Self::SoftConfirm { .. } => QuestionKind::SoftConfirm,
            Self::HardConfirm { .. } => QuestionKind::HardConfirm,
        }
    }

    /// Feature key for tag-based questions.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::ExploreTag { tag } | Self::SoftConfirm { tag, .. } => Some(tag),
            Self::HardConfirm { .. } => None,
        }
    }

    /// Candidate targeted by confirm questions.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::ExploreTag { .. } => None,
            Self::SoftConfirm { candidate_id, .. } | Self::HardConfirm { candidate_id, .. } => {
                Some(candidate_id)
            }
        }
    }
}

/// One immutable history entry: what was asked and how it was answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 1-based question number.
    pub index: u32,
    pub question: Question,
    pub answer: Answer,
    pub strength: f64,
}

impl QuestionRecord {
    pub fn new(index: u32, question: Question, answer: Answer) -> Self {
        Self {
            index,
            question,
            strength: answer.strength(),
            answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_serializes_with_kind_tag() {
        let q = Question::HardConfirm {
            candidate_id: "work_001".into(),
            probe: HardConfirmProbe::TitleInitial { value: "A".into() },
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["kind"], "hard_confirm");
        assert_eq!(json["probe"]["type"], "title_initial");
        let back: Question = serde_json::from_value(json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn hard_confirm_without_probe_is_rejected() {
        let json = serde_json::json!({ "kind": "hard_confirm", "candidate_id": "w" });
        assert!(serde_json::from_value::<Question>(json).is_err());
    }
}
