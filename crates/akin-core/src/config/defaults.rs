// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_BETA: f64 = 1.0;
pub const DEFAULT_ALPHA: f64 = 0.05;
pub const DEFAULT_DERIVED_CONFIDENCE_THRESHOLD: f64 = 0.6;
pub const DEFAULT_PLAY_BONUS_SCALE: f64 = 1.0;

// --- Confirm ---
pub const DEFAULT_SOFT_BAND_MIN: f64 = 0.4;
pub const DEFAULT_SOFT_BAND_MAX: f64 = 0.8;
pub const DEFAULT_HARD_CONFIDENCE_MIN: f64 = 0.8;
pub const DEFAULT_REVEAL_PENALTY: f64 = 0.25;
pub const DEFAULT_MIN_QUESTIONS_FLOOR: u32 = 3;
pub const DEFAULT_MIN_QUESTIONS_CAP: u32 = 10;
pub const DEFAULT_MIN_QUESTIONS_DIVISOR: f64 = 250.0;

// --- Limits ---
pub const DEFAULT_MAX_QUESTIONS: u32 = 25;
pub const DEFAULT_MAX_REVEAL_MISSES: u32 = 3;
pub const DEFAULT_FAIL_LIST_N: usize = 5;

// --- Coverage ---
pub const DEFAULT_MIN_COVERAGE_RATIO: f64 = 0.01;
pub const DEFAULT_MIN_COVERAGE_WORKS: u32 = 3;
pub const DEFAULT_MAX_COVERAGE_RATIO: f64 = 0.95;
pub const DEFAULT_RELEVANT_PROBABILITY_FLOOR: f64 = 0.0;
