//! Weight update engine.
//!
//! Every function takes a weight vector by reference and returns a new one;
//! the caller decides when to replace session state.

use akin_core::constants::{WEIGHT_CEILING, WEIGHT_FLOOR};
use akin_core::models::{Catalog, WeightVector};
use tracing::{debug, warn};

/// Multiplier for one candidate after a tag answer of `strength`.
///
/// The side agreeing with the answer is scaled by `exp(beta × |s|)`:
/// holders when `s > 0`, non-holders when `s < 0`. The other side keeps
/// its weight, and `s = 0` leaves everyone untouched.
pub fn answer_multiplier(has_feature: bool, strength: f64, beta: f64) -> f64 {
    let agrees = (strength > 0.0 && has_feature) || (strength < 0.0 && !has_feature);
    if agrees {
        (beta * strength.abs()).exp()
    } else {
        1.0
    }
}

/// Apply an explore or soft-confirm answer about `feature_key`.
pub fn apply_tag_answer(
    weights: &WeightVector,
    catalog: &Catalog,
    feature_key: &str,
    strength: f64,
    beta: f64,
    derived_threshold: f64,
) -> WeightVector {
    if strength == 0.0 {
        return weights.clone();
    }
    let updated = weights
        .iter()
        .map(|(id, &w)| {
            let has = catalog.has_feature(id, feature_key, derived_threshold);
            (id.clone(), w * answer_multiplier(has, strength, beta))
        })
        .collect();
    stabilize(updated)
}

/// Demote a candidate whose reveal was rejected. Other weights are untouched.
pub fn apply_reveal_penalty(weights: &WeightVector, candidate_id: &str, penalty: f64) -> WeightVector {
    let mut updated = weights.clone();
    if let Some(w) = updated.get_mut(candidate_id) {
        *w *= penalty;
        debug!(candidate_id, penalty, weight = *w, "reveal penalty applied");
    }
    stabilize(updated)
}

/// Keep every weight strictly positive and finite.
///
/// When the largest weight leaves `[WEIGHT_FLOOR, WEIGHT_CEILING]` the whole
/// vector is divided by it, which keeps relative order. Each weight is then
/// floored at `f64::MIN_POSITIVE`.
pub fn stabilize(mut weights: WeightVector) -> WeightVector {
    let max = weights.values().copied().fold(0.0f64, f64::max);
    if max.is_finite() && max > 0.0 && !(WEIGHT_FLOOR..=WEIGHT_CEILING).contains(&max) {
        warn!(max, "renormalizing weight vector");
        for w in weights.values_mut() {
            *w /= max;
        }
    } else if max.is_infinite() {
        // Overflowed entries collapse to 1, everyone else to the floor.
        warn!("weight overflow, collapsing to dominant candidates");
        for w in weights.values_mut() {
            *w = if w.is_infinite() { 1.0 } else { 0.0 };
        }
    }
    for w in weights.values_mut() {
        if !(w.is_finite() && *w >= f64::MIN_POSITIVE) {
            *w = f64::MIN_POSITIVE;
        }
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_multiplier_is_one() {
        assert_eq!(answer_multiplier(true, 0.0, 3.0), 1.0);
        assert_eq!(answer_multiplier(false, 0.0, 3.0), 1.0);
    }

    #[test]
    fn negative_answer_mirrors_positive() {
        let beta = 1.3;
        assert_eq!(
            answer_multiplier(true, 0.6, beta),
            answer_multiplier(false, -0.6, beta)
        );
        assert_eq!(
            answer_multiplier(false, 0.6, beta),
            answer_multiplier(true, -0.6, beta)
        );
    }

    #[test]
    fn stabilize_rescales_huge_vectors() {
        let weights: WeightVector = [("a".to_string(), 1e200), ("b".to_string(), 1e199)]
            .into_iter()
            .collect();
        let out = stabilize(weights);
        assert_eq!(out["a"], 1.0);
        assert!((out["b"] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn stabilize_floors_zero_and_nan() {
        let weights: WeightVector = [
            ("a".to_string(), 1.0),
            ("b".to_string(), 0.0),
            ("c".to_string(), f64::NAN),
        ]
        .into_iter()
        .collect();
        let out = stabilize(weights);
        assert_eq!(out["a"], 1.0);
        assert_eq!(out["b"], f64::MIN_POSITIVE);
        assert_eq!(out["c"], f64::MIN_POSITIVE);
    }

    #[test]
    fn stabilize_handles_infinite_entries() {
        let weights: WeightVector = [("a".to_string(), f64::INFINITY), ("b".to_string(), 2.0)]
            .into_iter()
            .collect();
        let out = stabilize(weights);
        assert_eq!(out["a"], 1.0);
        assert_eq!(out["b"], f64::MIN_POSITIVE);
    }
}
