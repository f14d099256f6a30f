//! Top-level Akin configuration.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConfirmConfig, CoverageConfig, CoverageMode, LimitsConfig, PolicyConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Process-wide configuration, built once at startup and passed by
/// reference to every component.
///
/// ```toml
/// [scoring]
/// beta = 1.0
///
/// [coverage]
/// mode = "ratio"
/// min_ratio = 0.1
///
/// [[policy.forced]]
/// index = 1
/// kind = "explore_tag"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AkinConfig {
    pub scoring: ScoringConfig,
    pub confirm: ConfirmConfig,
    pub limits: LimitsConfig,
    pub coverage: CoverageConfig,
    pub policy: PolicyConfig,
}

impl AkinConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: AkinConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: AkinConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        if !s.beta.is_finite() || s.beta <= 0.0 {
            return Err(ConfigError::invalid("scoring.beta", "must be finite and > 0"));
        }
        if !s.alpha.is_finite() {
            return Err(ConfigError::invalid("scoring.alpha", "must be finite"));
        }
        unit_interval("scoring.derived_confidence_threshold", s.derived_confidence_threshold)?;
        if !s.play_bonus_scale.is_finite() || s.play_bonus_scale < 0.0 {
            return Err(ConfigError::invalid(
                "scoring.play_bonus_scale",
                "must be finite and >= 0",
            ));
        }

        let c = &self.confirm;
        unit_interval("confirm.soft_band_min", c.soft_band_min)?;
        unit_interval("confirm.soft_band_max", c.soft_band_max)?;
        if c.soft_band_min > c.soft_band_max {
            return Err(ConfigError::invalid(
                "confirm.soft_band_min",
                format!(
                    "band is inverted: {} > {}",
                    c.soft_band_min, c.soft_band_max
                ),
            ));
        }
        if !(c.hard_confidence_min > 0.0 && c.hard_confidence_min <= 1.0) {
            return Err(ConfigError::invalid(
                "confirm.hard_confidence_min",
                "must be in (0, 1]",
            ));
        }
        if !(c.reveal_penalty > 0.0 && c.reveal_penalty <= 1.0) {
            return Err(ConfigError::invalid("confirm.reveal_penalty", "must be in (0, 1]"));
        }
        if c.min_questions_floor > c.min_questions_cap {
            return Err(ConfigError::invalid(
                "confirm.min_questions_floor",
                "must not exceed confirm.min_questions_cap",
            ));
        }
        if !c.min_questions_divisor.is_finite() || c.min_questions_divisor <= 0.0 {
            return Err(ConfigError::invalid(
                "confirm.min_questions_divisor",
                "must be finite and > 0",
            ));
        }

        let l = &self.limits;
        if l.max_questions == 0 {
            return Err(ConfigError::invalid("limits.max_questions", "must be greater than 0"));
        }
        if l.max_reveal_misses == 0 {
            return Err(ConfigError::invalid(
                "limits.max_reveal_misses",
                "must be greater than 0",
            ));
        }
        if l.fail_list_n == 0 {
            return Err(ConfigError::invalid("limits.fail_list_n", "must be greater than 0"));
        }

        let g = &self.coverage;
        if let Some(ratio) = g.min_ratio {
            unit_interval("coverage.min_ratio", ratio)?;
        }
        if let Some(ratio) = g.max_ratio {
            unit_interval("coverage.max_ratio", ratio)?;
        }
        let needs_ratio = matches!(g.mode, CoverageMode::Ratio | CoverageMode::Auto);
        let needs_works = matches!(g.mode, CoverageMode::Works | CoverageMode::Auto);
        if needs_ratio && g.min_ratio.is_none() {
            return Err(ConfigError::MissingParameter {
                field: "coverage.min_ratio".to_string(),
                mode: g.mode.to_string(),
            });
        }
        if needs_works && g.min_works.is_none() {
            return Err(ConfigError::MissingParameter {
                field: "coverage.min_works".to_string(),
                mode: g.mode.to_string(),
            });
        }
        if !(0.0..1.0).contains(&g.relevant_probability_floor) {
            return Err(ConfigError::invalid(
                "coverage.relevant_probability_floor",
                "must be in [0, 1)",
            ));
        }

        let mut seen = HashSet::new();
        for forced in &self.policy.forced {
            if forced.index == 0 {
                return Err(ConfigError::invalid(
                    "policy.forced.index",
                    "question numbers start at 1",
                ));
            }
            if !seen.insert(forced.index) {
                return Err(ConfigError::invalid(
                    "policy.forced.index",
                    format!("index {} is forced more than once", forced.index),
                ));
            }
        }

        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be between 0.0 and 1.0"))
    }
}
