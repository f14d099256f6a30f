use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults;

/// How the lower coverage bound is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageMode {
    /// Fraction of candidates carrying the feature.
    Ratio,
    /// Raw number of candidates carrying the feature.
    Works,
    /// Ratio test against a floor derived from both parameters.
    #[default]
    Auto,
}

impl fmt::Display for CoverageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ratio => "ratio",
            Self::Works => "works",
            Self::Auto => "auto",
        })
    }
}

/// Coverage gate parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverageConfig {
    pub mode: CoverageMode,
    pub min_ratio: Option<f64>,
    pub min_works: Option<u32>,
    /// Features carried by more than this fraction are uninformative.
    pub max_ratio: Option<f64>,
    /// Candidates below this probability are not counted when computing
    /// coverage. 0 counts every candidate.
    pub relevant_probability_floor: f64,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            mode: CoverageMode::Auto,
            min_ratio: Some(defaults::DEFAULT_MIN_COVERAGE_RATIO),
            min_works: Some(defaults::DEFAULT_MIN_COVERAGE_WORKS),
            max_ratio: Some(defaults::DEFAULT_MAX_COVERAGE_RATIO),
            relevant_probability_floor: defaults::DEFAULT_RELEVANT_PROBABILITY_FLOOR,
        }
    }
}
