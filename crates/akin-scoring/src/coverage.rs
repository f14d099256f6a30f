//! Coverage gate: is a feature a statistically usable question?

use akin_core::config::{CoverageConfig, CoverageMode};

/// `candidatesWithFeature / totalCandidates`, 0 when there are no candidates.
pub fn coverage_ratio(with_feature: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        with_feature as f64 / total as f64
    }
}

/// Ratio floor implied by both parameters in `auto` mode:
/// `max(minRatio, min(minWorks, total) / max(total, 1))`. Never above 1.
pub fn effective_min_ratio(min_ratio: f64, min_works: u32, total: usize) -> f64 {
    let works_floor = (min_works as usize).min(total) as f64 / total.max(1) as f64;
    min_ratio.max(works_floor)
}

/// Whether a feature held by `with_feature` of `total` relevant candidates
/// may be asked.
///
/// The upper bound is checked first and applies in every mode. A mode
/// whose parameter is missing fails closed.
pub fn passes_coverage_gate(with_feature: usize, total: usize, config: &CoverageConfig) -> bool {
    let ratio = coverage_ratio(with_feature, total);

    if let Some(max_ratio) = config.max_ratio {
        if ratio > max_ratio {
            return false;
        }
    }

    match config.mode {
        CoverageMode::Ratio => config.min_ratio.is_some_and(|min| ratio >= min),
        CoverageMode::Works => config
            .min_works
            .is_some_and(|min| with_feature >= min as usize),
        CoverageMode::Auto => match (config.min_ratio, config.min_works) {
            (Some(min_ratio), Some(min_works)) => {
                ratio >= effective_min_ratio(min_ratio, min_works, total)
            }
            _ => false,
        },
    }
}
