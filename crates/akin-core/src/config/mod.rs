//! Configuration system for Akin.
//! TOML-based, strictly validated: unknown keys, out-of-range values and
//! missing mode parameters all reject loading.

pub mod akin_config;
pub mod confirm_config;
pub mod coverage_config;
pub mod defaults;
pub mod limits_config;
pub mod policy_config;
pub mod scoring_config;

pub use akin_config::AkinConfig;
pub use confirm_config::ConfirmConfig;
pub use coverage_config::{CoverageConfig, CoverageMode};
pub use limits_config::LimitsConfig;
pub use policy_config::{ForcedQuestion, PolicyConfig};
pub use scoring_config::ScoringConfig;
