use serde::{Deserialize, Serialize};

use super::defaults;

/// Session length limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    pub max_questions: u32,
    pub max_reveal_misses: u32,
    /// Length of the fallback list offered when the session gives up.
    pub fail_list_n: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_questions: defaults::DEFAULT_MAX_QUESTIONS,
            max_reveal_misses: defaults::DEFAULT_MAX_REVEAL_MISSES,
            fail_list_n: defaults::DEFAULT_FAIL_LIST_N,
        }
    }
}
