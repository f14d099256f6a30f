//! SessionMachine: the per-turn state machine.
//!
//! ```text
//! ASKING ⇄ SOFT_CONFIRM ⇄ HARD_CONFIRM ─┬─► REVEAL_SUCCESS
//!    ▲                                  └─► REVEAL_MISS ─► ASKING
//!    └── max questions / max misses / nothing to ask ─► FAIL_LIST ─┬─► ALMOST_SUCCESS
//!                                                                  └─► NOT_IN_LIST
//! ```
//!
//! Every operation validates first and mutates after, so an error leaves
//! the session exactly as it was.

use akin_core::config::AkinConfig;
use akin_core::errors::SessionError;
use akin_core::models::{
    AiGate, Answer, Catalog, Outcome, Question, QuestionKind, QuestionRecord, Session,
    SessionPhase,
};
use akin_scoring::{apply_reveal_penalty, apply_tag_answer, initial_weights, normalize, top_n, Belief};
use akin_selection::{QuestionSelector, SelectionContext};
use tracing::{debug, info, warn};

use crate::explain::explain_reveal;
use crate::turn::Turn;

/// Stateless driver over a shared config and catalog snapshot. Sessions
/// are plain values passed in by the caller.
pub struct SessionMachine<'a> {
    config: &'a AkinConfig,
    catalog: &'a Catalog,
    selector: QuestionSelector<'a>,
}

impl<'a> SessionMachine<'a> {
    pub fn new(config: &'a AkinConfig, catalog: &'a Catalog) -> Self {
        Self {
            config,
            catalog,
            selector: QuestionSelector::new(config, catalog),
        }
    }

    /// Create a session with prior weights and pick its first question.
    pub fn start(
        &self,
        session_id: impl Into<String>,
        ai_gate: AiGate,
    ) -> Result<(Session, Turn), SessionError> {
        let weights = initial_weights(self.catalog, &self.config.scoring);
        if weights.is_empty() {
            return Err(SessionError::EmptyCandidateSet);
        }
        let mut session = Session::new(session_id, weights, ai_gate);
        info!(
            session_id = %session.session_id,
            candidates = session.weights.len(),
            ai_gate = ai_gate.as_str(),
            "session started"
        );
        let turn = self.advance(&mut session);
        Ok((session, turn))
    }

    /// Apply the player's answer to the pending question and move on.
    pub fn answer(&self, session: &mut Session, answer: Answer) -> Result<Turn, SessionError> {
        let question = self.pending_question(session)?.clone();

        let record = QuestionRecord::new(session.question_count + 1, question.clone(), answer);
        session.history.push(record);
        session.question_count += 1;
        session.pending = None;

        match &question {
            Question::ExploreTag { tag } | Question::SoftConfirm { tag, .. } => {
                session.weights = apply_tag_answer(
                    &session.weights,
                    self.catalog,
                    tag,
                    answer.strength(),
                    self.config.scoring.beta,
                    self.config.scoring.derived_confidence_threshold,
                );
            }
            Question::HardConfirm { candidate_id, .. } if answer.is_affirmative() => {
                let outcome = Outcome::Success {
                    candidate_id: candidate_id.clone(),
                };
                return Ok(self.finish(session, SessionPhase::RevealSuccess, outcome));
            }
            Question::HardConfirm { candidate_id, .. } => {
                session.weights = apply_reveal_penalty(
                    &session.weights,
                    candidate_id,
                    self.config.confirm.reveal_penalty,
                );
                session.reveal_misses += 1;
                session.phase = SessionPhase::RevealMiss;
                warn!(
                    session_id = %session.session_id,
                    candidate_id = %candidate_id,
                    misses = session.reveal_misses,
                    "reveal rejected"
                );
            }
        }

        Ok(self.advance(session))
    }

    /// Resolve a session waiting in `FAIL_LIST`: `Some(id)` picks a listed
    /// candidate, `None` says the answer was not listed.
    pub fn resolve_fail_list(
        &self,
        session: &mut Session,
        choice: Option<&str>,
    ) -> Result<Turn, SessionError> {
        if session.is_terminal() {
            return Err(SessionError::Terminated {
                id: session.session_id.clone(),
            });
        }
        if session.phase != SessionPhase::FailList {
            return Err(SessionError::UnexpectedAction {
                id: session.session_id.clone(),
                expected: "a fail-list choice".to_string(),
            });
        }
        match choice {
            Some(id) => {
                if !session.fail_list.iter().any(|c| c == id) {
                    return Err(SessionError::NotInFailList {
                        candidate_id: id.to_string(),
                    });
                }
                let outcome = Outcome::AlmostSuccess {
                    candidate_id: id.to_string(),
                };
                Ok(self.finish(session, SessionPhase::AlmostSuccess, outcome))
            }
            None => Ok(self.finish(session, SessionPhase::NotInList, Outcome::NotInList)),
        }
    }

    /// Current belief signals for a session.
    pub fn belief(&self, session: &Session) -> Belief {
        Belief::from_weights(&session.weights)
    }

    /// Validate the pending question against the session and catalog.
    fn pending_question<'s>(&self, session: &'s Session) -> Result<&'s Question, SessionError> {
        if session.is_terminal() {
            return Err(SessionError::Terminated {
                id: session.session_id.clone(),
            });
        }
        if session.phase == SessionPhase::FailList {
            return Err(SessionError::UnexpectedAction {
                id: session.session_id.clone(),
                expected: "an answer".to_string(),
            });
        }
        let question = session
            .pending
            .as_ref()
            .ok_or_else(|| SessionError::NoPendingQuestion {
                id: session.session_id.clone(),
            })?;
        if let Some(tag) = question.tag() {
            if self.catalog.feature(tag).is_none() {
                return Err(SessionError::UnknownFeature {
                    key: tag.to_string(),
                });
            }
        }
        if let Some(target) = question.target() {
            if !session.weights.contains_key(target) {
                return Err(SessionError::UnknownCandidate {
                    id: target.to_string(),
                });
            }
        }
        Ok(question)
    }

    /// Decide the next transition after weights were updated.
    fn advance(&self, session: &mut Session) -> Turn {
        let limits = &self.config.limits;
        if session.reveal_misses >= limits.max_reveal_misses {
            debug!(session_id = %session.session_id, "reveal misses exhausted");
            return self.enter_fail_list(session);
        }
        if session.question_count >= limits.max_questions {
            debug!(session_id = %session.session_id, "question limit reached");
            return self.enter_fail_list(session);
        }

        let probabilities = normalize(&session.weights);
        let belief = Belief::from_probabilities(&probabilities);
        let after_miss = session.phase == SessionPhase::RevealMiss;
        let ctx = SelectionContext {
            next_index: session.question_count + 1,
            answered: session.question_count,
            ai_gate: session.ai_gate,
            history: &session.history,
            after_miss,
        };

        let Some(selection) = self.selector.next_question(&probabilities, &ctx) else {
            debug!(session_id = %session.session_id, "nothing left to ask");
            return self.enter_fail_list(session);
        };

        session.phase = match selection.question.kind() {
            QuestionKind::ExploreTag => SessionPhase::Asking,
            QuestionKind::SoftConfirm => SessionPhase::SoftConfirm,
            QuestionKind::HardConfirm => SessionPhase::HardConfirm,
        };
        debug!(
            session_id = %session.session_id,
            question = session.question_count + 1,
            kind = selection.question.kind().as_str(),
            reason = ?selection.reason,
            confidence = belief.confidence,
            effective_candidates = belief.effective_candidates,
            "question selected"
        );
        session.pending = Some(selection.question.clone());

        Turn::Ask {
            question: selection.question,
            phase: session.phase,
            belief,
        }
    }

    fn enter_fail_list(&self, session: &mut Session) -> Turn {
        let probabilities = normalize(&session.weights);
        session.fail_list = top_n(&probabilities, self.config.limits.fail_list_n);
        session.phase = SessionPhase::FailList;
        session.pending = None;
        info!(
            session_id = %session.session_id,
            questions = session.question_count,
            misses = session.reveal_misses,
            "session fell back to fail list"
        );
        Turn::FailList {
            candidates: session.fail_list.clone(),
        }
    }

    fn finish(&self, session: &mut Session, phase: SessionPhase, outcome: Outcome) -> Turn {
        session.phase = phase;
        session.pending = None;
        session.outcome = Some(outcome.clone());
        let explanation = outcome
            .candidate_id()
            .map(|id| {
                explain_reveal(
                    self.catalog,
                    &session.history,
                    id,
                    self.config.scoring.derived_confidence_threshold,
                )
            })
            .unwrap_or_default();
        info!(
            session_id = %session.session_id,
            outcome = outcome.tag().as_str(),
            questions = session.question_count,
            "session finished"
        );
        Turn::Finished {
            outcome,
            explanation,
        }
    }
}
