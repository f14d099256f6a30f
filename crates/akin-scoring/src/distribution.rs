//! Scoring engine: turns weights into probabilities and scalar signals.
//!
//! Ordering used everywhere a top-1 or top-N list is produced:
//! probability descending, then candidate id ascending.

use std::cmp::Ordering;

use akin_core::models::{ProbabilityVector, WeightVector};
use serde::Serialize;

/// `p(w) = weight(w) / Σweight`. Falls back to uniform when the total is
/// zero or not finite.
pub fn normalize(weights: &WeightVector) -> ProbabilityVector {
    let n = weights.len();
    if n == 0 {
        return ProbabilityVector::new();
    }
    let total: f64 = weights.values().sum();
    if !(total.is_finite() && total > 0.0) {
        let uniform = 1.0 / n as f64;
        return weights.keys().map(|id| (id.clone(), uniform)).collect();
    }
    weights
        .iter()
        .map(|(id, &w)| (id.clone(), w / total))
        .collect()
}

/// Most probable candidate. Among exact ties the lexicographically
/// smallest id wins, independent of how the vector was built.
pub fn top_candidate(probabilities: &ProbabilityVector) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    // BTreeMap iterates ids ascending, so keeping the first strict maximum
    // yields the smallest id among ties.
    for (id, &p) in probabilities {
        match best {
            Some((_, bp)) if p <= bp => {}
            _ => best = Some((id.as_str(), p)),
        }
    }
    best
}

/// Max probability; 0 for an empty distribution.
pub fn confidence(probabilities: &ProbabilityVector) -> f64 {
    top_candidate(probabilities).map_or(0.0, |(_, p)| p)
}

/// Participation ratio `1 / Σp²`. 0 for an empty distribution.
pub fn effective_candidates(probabilities: &ProbabilityVector) -> f64 {
    let sum_sq: f64 = probabilities.values().map(|p| p * p).sum();
    if sum_sq > 0.0 {
        1.0 / sum_sq
    } else {
        0.0
    }
}

/// All candidates in work order.
pub fn ranked(probabilities: &ProbabilityVector) -> Vec<(String, f64)> {
    let mut out: Vec<(String, f64)> = probabilities
        .iter()
        .map(|(id, &p)| (id.clone(), p))
        .collect();
    out.sort_by(work_order);
    out
}

/// First `n` candidate ids in work order.
pub fn top_n(probabilities: &ProbabilityVector, n: usize) -> Vec<String> {
    ranked(probabilities)
        .into_iter()
        .take(n)
        .map(|(id, _)| id)
        .collect()
}

fn work_order(a: &(String, f64), b: &(String, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// `clamp(round(totalCandidates / divisor), min, max)`.
pub fn effective_confirm_threshold(total_candidates: usize, min: u32, max: u32, divisor: f64) -> u32 {
    if !(divisor.is_finite() && divisor > 0.0) {
        return min;
    }
    let raw = (total_candidates as f64 / divisor).round();
    let clamped = raw.clamp(min as f64, max.max(min) as f64);
    clamped as u32
}

/// Belief signals recomputed after every update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Belief {
    pub top: Option<String>,
    pub confidence: f64,
    pub effective_candidates: f64,
}

impl Belief {
    pub fn from_probabilities(probabilities: &ProbabilityVector) -> Self {
        let top = top_candidate(probabilities);
        Self {
            top: top.map(|(id, _)| id.to_string()),
            confidence: top.map_or(0.0, |(_, p)| p),
            effective_candidates: effective_candidates(probabilities),
        }
    }

    pub fn from_weights(weights: &WeightVector) -> Self {
        Self::from_probabilities(&normalize(weights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(&str, f64)]) -> WeightVector {
        pairs.iter().map(|(id, w)| (id.to_string(), *w)).collect()
    }

    #[test]
    fn uniform_normalizes_to_one_over_n() {
        let probs = normalize(&vector(&[("a", 2.0), ("b", 2.0), ("c", 2.0), ("d", 2.0)]));
        for p in probs.values() {
            assert!((p - 0.25).abs() < 1e-15);
        }
    }

    #[test]
    fn zero_total_falls_back_to_uniform() {
        let probs = normalize(&vector(&[("a", 0.0), ("b", 0.0)]));
        assert_eq!(probs["a"], 0.5);
        assert_eq!(probs["b"], 0.5);
    }

    #[test]
    fn empty_distribution_signals() {
        let probs = ProbabilityVector::new();
        assert_eq!(confidence(&probs), 0.0);
        assert_eq!(effective_candidates(&probs), 0.0);
        assert!(top_candidate(&probs).is_none());
    }

    #[test]
    fn tie_resolves_to_smallest_id() {
        let probs = normalize(&vector(&[
            ("work_003", 0.5),
            ("work_001", 0.5),
            ("work_002", 0.5),
        ]));
        assert_eq!(top_candidate(&probs).unwrap().0, "work_001");
    }

    #[test]
    fn effective_candidates_tracks_spread() {
        let uniform = normalize(&vector(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]));
        assert!((effective_candidates(&uniform) - 3.0).abs() < 1e-12);
        let collapsed = normalize(&vector(&[("a", 1e12), ("b", 1.0), ("c", 1.0)]));
        assert!((effective_candidates(&collapsed) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ranked_orders_by_probability_then_id() {
        let probs = normalize(&vector(&[("b", 1.0), ("c", 3.0), ("a", 1.0)]));
        let ids: Vec<_> = ranked(&probs).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(top_n(&probs, 2), vec!["c", "a"]);
    }

    #[test]
    fn confirm_threshold_is_clamped() {
        assert_eq!(effective_confirm_threshold(1000, 2, 8, 250.0), 4);
        assert_eq!(effective_confirm_threshold(10, 2, 8, 250.0), 2);
        assert_eq!(effective_confirm_threshold(1_000_000, 2, 8, 250.0), 8);
        assert_eq!(effective_confirm_threshold(625, 0, 8, 250.0), 3);
        assert_eq!(effective_confirm_threshold(100, 3, 8, 0.0), 3);
    }
}
