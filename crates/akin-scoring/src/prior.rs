use akin_core::config::ScoringConfig;
use akin_core::models::{Candidate, Catalog, WeightVector};

use crate::update::stabilize;

/// Popularity prior.
///
/// Formula: `exp(alpha × (popularityBase + playBonusScale × popularityPlayBonus))`
///
/// `alpha = 0` yields a uniform prior.
pub fn base_prior(candidate: &Candidate, scoring: &ScoringConfig) -> f64 {
    let popularity =
        candidate.popularity_base + scoring.play_bonus_scale * candidate.popularity_play_bonus;
    (scoring.alpha * popularity).exp()
}

/// Starting weight vector for a new session over the whole catalog.
pub fn initial_weights(catalog: &Catalog, scoring: &ScoringConfig) -> WeightVector {
    let weights = catalog
        .candidates()
        .iter()
        .map(|c| (c.id.clone(), base_prior(c, scoring)))
        .collect();
    stabilize(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoring(alpha: f64) -> ScoringConfig {
        ScoringConfig {
            alpha,
            ..ScoringConfig::default()
        }
    }

    #[test]
    fn zero_alpha_is_uniform() {
        let a = Candidate::new("a", "A").with_popularity(5.0, 2.0);
        let b = Candidate::new("b", "B");
        assert_eq!(base_prior(&a, &scoring(0.0)), 1.0);
        assert_eq!(base_prior(&b, &scoring(0.0)), 1.0);
    }

    #[test]
    fn popularity_raises_prior() {
        let a = Candidate::new("a", "A").with_popularity(2.0, 1.0);
        let expected = (0.5f64 * 3.0).exp();
        assert!((base_prior(&a, &scoring(0.5)) - expected).abs() < 1e-12);
    }

    #[test]
    fn play_bonus_is_scaled() {
        let a = Candidate::new("a", "A").with_popularity(0.0, 4.0);
        let config = ScoringConfig {
            alpha: 1.0,
            play_bonus_scale: 0.5,
            ..ScoringConfig::default()
        };
        assert!((base_prior(&a, &config) - 2f64.exp()).abs() < 1e-12);
    }
}
