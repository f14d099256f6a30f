use serde::{Deserialize, Serialize};

use crate::models::QuestionKind;

/// Forces a question kind at a given 1-based question number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForcedQuestion {
    pub index: u32,
    pub kind: QuestionKind,
}

/// Overrides of the confidence-driven question policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub forced: Vec<ForcedQuestion>,
}

impl PolicyConfig {
    /// Kind forced at question number `index`, if any.
    pub fn forced_kind(&self, index: u32) -> Option<QuestionKind> {
        self.forced.iter().find(|f| f.index == index).map(|f| f.kind)
    }
}
