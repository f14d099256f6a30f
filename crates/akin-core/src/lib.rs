//! # akin-core
//!
//! Foundation crate for the Akin guessing engine.
//! Defines the catalog snapshot, session value, answers and questions,
//! configuration, errors, and the persistence seams.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::AkinConfig;
pub use errors::{AkinError, AkinResult};
pub use models::{
    AiGate, Answer, Candidate, Catalog, Feature, FeatureSource, Outcome, Question,
    QuestionKind, QuestionRecord, Session, SessionPhase,
};
