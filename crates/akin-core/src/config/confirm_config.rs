use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence bands and reveal handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfirmConfig {
    /// Lower edge of the soft-confirm band (inclusive).
    pub soft_band_min: f64,
    /// Upper edge of the soft-confirm band (inclusive).
    pub soft_band_max: f64,
    /// Confidence at or above which a hard confirm is attempted.
    pub hard_confidence_min: f64,
    /// Multiplier applied to a candidate whose reveal was rejected.
    pub reveal_penalty: f64,
    /// Floor of the catalog-scaled minimum question count before confirming.
    pub min_questions_floor: u32,
    /// Cap of the catalog-scaled minimum question count before confirming.
    pub min_questions_cap: u32,
    /// Catalog size per required question.
    pub min_questions_divisor: f64,
}

impl ConfirmConfig {
    pub fn in_soft_band(&self, confidence: f64) -> bool {
        (self.soft_band_min..=self.soft_band_max).contains(&confidence)
    }
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            soft_band_min: defaults::DEFAULT_SOFT_BAND_MIN,
            soft_band_max: defaults::DEFAULT_SOFT_BAND_MAX,
            hard_confidence_min: defaults::DEFAULT_HARD_CONFIDENCE_MIN,
            reveal_penalty: defaults::DEFAULT_REVEAL_PENALTY,
            min_questions_floor: defaults::DEFAULT_MIN_QUESTIONS_FLOOR,
            min_questions_cap: defaults::DEFAULT_MIN_QUESTIONS_CAP,
            min_questions_divisor: defaults::DEFAULT_MIN_QUESTIONS_DIVISOR,
        }
    }
}
