//! # akin-selection
//!
//! Chooses the next question for a session: the most balanced explore tag,
//! a soft confirm on the top candidate's own features, or a hard-confirm
//! identity probe, following the confidence bands and forced slots.

pub mod probe;
pub mod selector;
pub mod split;

pub use probe::next_probe;
pub use selector::{QuestionSelector, Selection, SelectionContext, SelectionReason};
pub use split::{split_score, FeatureSplit};
