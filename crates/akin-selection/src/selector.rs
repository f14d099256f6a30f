//! QuestionSelector: picks the next question from the current belief.

use std::collections::HashSet;

use akin_core::config::AkinConfig;
use akin_core::constants::SCORE_TIE_EPSILON;
use akin_core::models::{AiGate, Catalog, ProbabilityVector, Question, QuestionKind, QuestionRecord};
use akin_scoring::{effective_confirm_threshold, passes_coverage_gate, top_candidate};
use tracing::debug;

use crate::probe::next_probe;
use crate::split::{split_score, FeatureSplit};

/// Session facts the selector needs besides the belief.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'s> {
    /// 1-based number of the question about to be asked.
    pub next_index: u32,
    /// Questions answered so far.
    pub answered: u32,
    pub ai_gate: AiGate,
    pub history: &'s [QuestionRecord],
    /// The previous answer rejected a reveal.
    pub after_miss: bool,
}

/// Why a question was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    Forced,
    AfterMiss,
    HardBand,
    SoftBand,
    Explore,
    /// Nothing left to explore; escalating to confirmation.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub question: Question,
    pub reason: SelectionReason,
}

/// Stateless selector over a shared config and catalog.
pub struct QuestionSelector<'a> {
    config: &'a AkinConfig,
    catalog: &'a Catalog,
}

impl<'a> QuestionSelector<'a> {
    pub fn new(config: &'a AkinConfig, catalog: &'a Catalog) -> Self {
        Self { config, catalog }
    }

    /// Minimum number of answered questions before confirming, scaled by
    /// catalog size.
    pub fn confirm_threshold(&self) -> u32 {
        let c = &self.config.confirm;
        effective_confirm_threshold(
            self.catalog.len(),
            c.min_questions_floor,
            c.min_questions_cap,
            c.min_questions_divisor,
        )
    }

    /// Choose the next question, or `None` when nothing can be asked.
    ///
    /// Order: forced slot, explore after a rejected reveal, hard confirm at
    /// or above `hard_confidence_min`, soft confirm inside the band,
    /// explore, then escalation when exploration is exhausted.
    pub fn next_question(
        &self,
        probabilities: &ProbabilityVector,
        ctx: &SelectionContext<'_>,
    ) -> Option<Selection> {
        let (top, confidence) = top_candidate(probabilities)?;
        let may_confirm = ctx.answered >= self.confirm_threshold();
        let pick = |question: Option<Question>, reason| {
            question.map(|question| Selection { question, reason })
        };

        if let Some(kind) = self.config.policy.forced_kind(ctx.next_index) {
            let forced = match kind {
                QuestionKind::ExploreTag => self.select_explore(probabilities, ctx),
                QuestionKind::SoftConfirm if may_confirm => {
                    self.select_soft_confirm(probabilities, top, ctx)
                }
                QuestionKind::HardConfirm if may_confirm => self.select_hard_confirm(top, ctx),
                _ => None,
            };
            if let Some(selection) = pick(forced, SelectionReason::Forced) {
                return Some(selection);
            }
            debug!(index = ctx.next_index, kind = kind.as_str(), "forced slot unavailable");
        }

        if ctx.after_miss {
            if let Some(selection) = pick(
                self.select_explore(probabilities, ctx),
                SelectionReason::AfterMiss,
            ) {
                return Some(selection);
            }
        }

        let confirm = &self.config.confirm;
        if may_confirm && confidence >= confirm.hard_confidence_min {
            if let Some(selection) = pick(
                self.select_hard_confirm(top, ctx),
                SelectionReason::HardBand,
            ) {
                return Some(selection);
            }
        } else if may_confirm && confirm.in_soft_band(confidence) {
            if let Some(selection) = pick(
                self.select_soft_confirm(probabilities, top, ctx),
                SelectionReason::SoftBand,
            ) {
                return Some(selection);
            }
        }

        pick(self.select_explore(probabilities, ctx), SelectionReason::Explore)
            .or_else(|| {
                pick(
                    self.select_soft_confirm(probabilities, top, ctx),
                    SelectionReason::Exhausted,
                )
            })
            .or_else(|| pick(self.select_hard_confirm(top, ctx), SelectionReason::Exhausted))
    }

    /// Most evenly splitting unasked feature that passes the AI gate and the
    /// coverage gate. Near-ties go to the smallest key.
    pub fn select_explore(
        &self,
        probabilities: &ProbabilityVector,
        ctx: &SelectionContext<'_>,
    ) -> Option<Question> {
        let asked = asked_tags(ctx.history);
        let threshold = self.config.scoring.derived_confidence_threshold;
        let floor = self.config.coverage.relevant_probability_floor;

        let mut best: Option<(&str, f64)> = None;
        // Features iterate in key order; a later key must be strictly better.
        for feature in self.catalog.features() {
            if asked.contains(feature.key.as_str()) || !ctx.ai_gate.allows(feature.source) {
                continue;
            }
            let split = FeatureSplit::compute(
                self.catalog,
                probabilities,
                &feature.key,
                threshold,
                floor,
            );
            if !split.discriminates(probabilities.len()) {
                continue;
            }
            if !passes_coverage_gate(
                split.relevant_holders,
                split.relevant_total,
                &self.config.coverage,
            ) {
                continue;
            }
            let score = split_score(split.p_has);
            match best {
                Some((_, best_score)) if score >= best_score - SCORE_TIE_EPSILON => {}
                _ => best = Some((feature.key.as_str(), score)),
            }
        }

        best.map(|(key, score)| {
            debug!(tag = key, score, "explore tag selected");
            Question::ExploreTag {
                tag: key.to_string(),
            }
        })
    }

    /// Unasked feature of the top candidate with the least probability mass
    /// on other candidates. Near-ties go to the smallest key.
    pub fn select_soft_confirm(
        &self,
        probabilities: &ProbabilityVector,
        top: &str,
        ctx: &SelectionContext<'_>,
    ) -> Option<Question> {
        let asked = asked_tags(ctx.history);
        let threshold = self.config.scoring.derived_confidence_threshold;
        let p_top = probabilities.get(top).copied().unwrap_or(0.0);

        let mut best: Option<(&str, f64)> = None;
        for key in self.catalog.features_of(top, threshold) {
            if asked.contains(key) {
                continue;
            }
            let Some(feature) = self.catalog.feature(key) else {
                continue;
            };
            if !ctx.ai_gate.allows(feature.source) {
                continue;
            }
            let split = FeatureSplit::compute(self.catalog, probabilities, key, threshold, 0.0);
            if !split.discriminates(probabilities.len()) {
                continue;
            }
            let others = (split.p_has - p_top).max(0.0);
            match best {
                Some((_, best_mass)) if others >= best_mass - SCORE_TIE_EPSILON => {}
                _ => best = Some((key, others)),
            }
        }

        best.map(|(key, _)| Question::SoftConfirm {
            tag: key.to_string(),
            candidate_id: top.to_string(),
        })
    }

    /// Identity probe on the top candidate.
    pub fn select_hard_confirm(&self, top: &str, ctx: &SelectionContext<'_>) -> Option<Question> {
        let candidate = self.catalog.candidate(top)?;
        next_probe(candidate, ctx.history).map(|probe| Question::HardConfirm {
            candidate_id: candidate.id.clone(),
            probe,
        })
    }
}

fn asked_tags(history: &[QuestionRecord]) -> HashSet<&str> {
    history.iter().filter_map(|r| r.question.tag()).collect()
}
