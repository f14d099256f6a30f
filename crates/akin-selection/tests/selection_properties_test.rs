use akin_core::config::{AkinConfig, CoverageMode};
use akin_core::models::{AiGate, Candidate, Catalog, Feature, WeightVector};
use akin_scoring::normalize;
use akin_selection::{QuestionSelector, SelectionContext};
use proptest::prelude::*;

proptest! {
    /// Any number of identically distributed tags resolves to the smallest key,
    /// whatever order they were registered in.
    #[test]
    fn tied_tags_resolve_to_smallest_key(
        keys in prop::collection::btree_set("tag_[a-z]{1,4}", 2..12),
        reverse in any::<bool>(),
    ) {
        let mut ordered: Vec<String> = keys.iter().cloned().collect();
        if reverse {
            ordered.reverse();
        }
        let mut builder = Catalog::builder()
            .candidate(Candidate::new("w1", "One"))
            .candidate(Candidate::new("w2", "Two"));
        for key in &ordered {
            builder = builder.feature(Feature::curated(key.clone(), "?")).tag("w1", key.clone());
        }
        let catalog = builder.build().unwrap();

        let mut config = AkinConfig::default();
        config.coverage.mode = CoverageMode::Ratio;
        config.coverage.min_ratio = Some(0.0);
        config.coverage.max_ratio = None;
        let selector = QuestionSelector::new(&config, &catalog);

        let weights: WeightVector = [("w1".to_string(), 1.0), ("w2".to_string(), 1.0)].into_iter().collect();
        let ctx = SelectionContext {
            next_index: 1,
            answered: 0,
            ai_gate: AiGate::Allow,
            history: &[],
            after_miss: false,
        };
        let q = selector.select_explore(&normalize(&weights), &ctx).unwrap();
        prop_assert_eq!(q.tag(), keys.iter().next().map(String::as_str));
    }
}
