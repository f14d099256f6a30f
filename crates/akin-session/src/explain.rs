//! Reveal-time explanation: which answered tags matched the guess.

use akin_core::models::{Answer, Catalog, QuestionRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedFeature {
    pub key: String,
    pub display: String,
    pub answer: Answer,
}

/// Tag questions from `history` whose answer agreed with `candidate_id`:
/// affirmative on a feature it has, or negative on one it lacks.
/// Neutral answers never match.
pub fn explain_reveal(
    catalog: &Catalog,
    history: &[QuestionRecord],
    candidate_id: &str,
    derived_threshold: f64,
) -> Vec<MatchedFeature> {
    history
        .iter()
        .filter_map(|record| {
            let key = record.question.tag()?;
            let feature = catalog.feature(key)?;
            let has = catalog.has_feature(candidate_id, key, derived_threshold);
            let agrees = (has && record.answer.is_affirmative())
                || (!has && record.answer.is_negative());
            agrees.then(|| MatchedFeature {
                key: feature.key.clone(),
                display: feature.display.clone(),
                answer: record.answer,
            })
        })
        .collect()
}
