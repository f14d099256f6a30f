//! Split quality of a feature over the current belief.

use akin_core::models::{Catalog, ProbabilityVector};

/// How a feature partitions the current candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSplit {
    /// Probability mass on candidates carrying the feature.
    pub p_has: f64,
    /// Holders among all session candidates.
    pub holders: usize,
    /// Holders among currently relevant candidates.
    pub relevant_holders: usize,
    /// Number of currently relevant candidates.
    pub relevant_total: usize,
}

impl FeatureSplit {
    /// Compute the split of `feature_key` over `probabilities`.
    ///
    /// Candidates below `relevance_floor` are left out of the relevant
    /// counts. If that leaves nobody, every candidate counts as relevant.
    pub fn compute(
        catalog: &Catalog,
        probabilities: &ProbabilityVector,
        feature_key: &str,
        derived_threshold: f64,
        relevance_floor: f64,
    ) -> Self {
        let relevant_total = probabilities
            .values()
            .filter(|&&p| p >= relevance_floor)
            .count();
        let use_all = relevant_total == 0;

        let mut split = FeatureSplit {
            p_has: 0.0,
            holders: 0,
            relevant_holders: 0,
            relevant_total: if use_all {
                probabilities.len()
            } else {
                relevant_total
            },
        };
        for (id, &p) in probabilities {
            if !catalog.has_feature(id, feature_key, derived_threshold) {
                continue;
            }
            split.p_has += p;
            split.holders += 1;
            if use_all || p >= relevance_floor {
                split.relevant_holders += 1;
            }
        }
        split
    }

    /// Whether asking could move the belief at all.
    pub fn discriminates(&self, total: usize) -> bool {
        self.holders > 0 && self.holders < total
    }
}

/// Distance from an even split, `|P(has) − 0.5|`. Smaller is better.
pub fn split_score(p_has: f64) -> f64 {
    (p_has - 0.5).abs()
}
