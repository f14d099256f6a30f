pub mod ai_gate;
pub mod answer;
pub mod candidate;
pub mod catalog;
pub mod feature;
pub mod outcome;
pub mod play_record;
pub mod question;
pub mod session;

pub use ai_gate::AiGate;
pub use answer::Answer;
pub use candidate::{title_initial, Candidate};
pub use catalog::{Catalog, CatalogBuilder, CatalogSnapshot, Incidence};
pub use feature::{Feature, FeatureSource};
pub use outcome::{Outcome, OutcomeTag, SessionPhase};
pub use play_record::PlayRecord;
pub use question::{HardConfirmProbe, ProbeKind, Question, QuestionKind, QuestionRecord};
pub use session::{ProbabilityVector, Session, WeightVector};
