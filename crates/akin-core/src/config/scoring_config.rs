use serde::{Deserialize, Serialize};

use super::defaults;

/// Prior and answer-update parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Answer-update steepness.
    pub beta: f64,
    /// Popularity-prior steepness. 0 gives a uniform prior.
    pub alpha: f64,
    /// Derived incidences below this confidence count as absent.
    pub derived_confidence_threshold: f64,
    /// Multiplier on each candidate's play bonus before it enters the prior.
    pub play_bonus_scale: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            beta: defaults::DEFAULT_BETA,
            alpha: defaults::DEFAULT_ALPHA,
            derived_confidence_threshold: defaults::DEFAULT_DERIVED_CONFIDENCE_THRESHOLD,
            play_bonus_scale: defaults::DEFAULT_PLAY_BONUS_SCALE,
        }
    }
}
