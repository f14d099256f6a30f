// Numeric constants shared across the engine.

/// Two split or selection scores closer than this are treated as tied.
pub const SCORE_TIE_EPSILON: f64 = 1e-12;

/// Largest weight tolerated before the whole vector is rescaled.
pub const WEIGHT_CEILING: f64 = 1e150;

/// Smallest "largest weight" tolerated before the whole vector is rescaled.
pub const WEIGHT_FLOOR: f64 = 1e-150;

/// Environment variable read by `tracing::init_tracing`.
pub const LOG_ENV_VAR: &str = "AKIN_LOG";

/// Filter used when `AKIN_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "akin=info";
