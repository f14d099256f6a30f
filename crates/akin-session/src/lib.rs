//! # akin-session
//!
//! Drives one guessing session from its first question to a terminal
//! outcome. `SessionMachine` is the pure per-turn core; `AkinService`
//! wraps it with a session repository and a play-history sink.

pub mod explain;
pub mod machine;
pub mod repository;
pub mod service;
pub mod turn;

pub use explain::{explain_reveal, MatchedFeature};
pub use machine::SessionMachine;
pub use repository::{InMemoryPlayHistory, InMemorySessionRepository};
pub use service::AkinService;
pub use turn::Turn;
