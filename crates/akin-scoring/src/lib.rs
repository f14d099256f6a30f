//! # akin-scoring
//!
//! Pure, synchronous functions over in-memory weight vectors:
//! popularity priors, answer and reveal-penalty updates, normalization,
//! confidence and effective-candidate signals, and the coverage gate.

pub mod coverage;
pub mod distribution;
pub mod prior;
pub mod update;

pub use coverage::{coverage_ratio, effective_min_ratio, passes_coverage_gate};
pub use distribution::{
    confidence, effective_candidates, effective_confirm_threshold, normalize, ranked, top_candidate,
    top_n, Belief,
};
pub use prior::{base_prior, initial_weights};
pub use update::{answer_multiplier, apply_reveal_penalty, apply_tag_answer, stabilize};
