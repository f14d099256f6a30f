use std::collections::HashSet;

use akin_core::models::{Candidate, HardConfirmProbe, ProbeKind, Question, QuestionRecord};

/// Identity probe for `candidate`.
///
/// Title initial first, then author when the candidate has one. A kind
/// already used against this candidate is skipped; once every kind was
/// used the first available one is reused.
pub fn next_probe(candidate: &Candidate, history: &[QuestionRecord]) -> Option<HardConfirmProbe> {
    let used: HashSet<ProbeKind> = history
        .iter()
        .filter_map(|r| match &r.question {
            Question::HardConfirm { candidate_id, probe } if *candidate_id == candidate.id => {
                Some(probe.kind())
            }
            _ => None,
        })
        .collect();

    let available: Vec<HardConfirmProbe> = [
        candidate
            .title_initial()
            .map(|value| HardConfirmProbe::TitleInitial { value }),
        candidate
            .author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(|a| HardConfirmProbe::Author {
                value: a.to_string(),
            }),
    ]
    .into_iter()
    .flatten()
    .collect();

    available
        .iter()
        .find(|p| !used.contains(&p.kind()))
        .or_else(|| available.first())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use akin_core::models::Answer;

    fn miss(candidate_id: &str, probe: HardConfirmProbe) -> QuestionRecord {
        QuestionRecord::new(
            1,
            Question::HardConfirm {
                candidate_id: candidate_id.into(),
                probe,
            },
            Answer::No,
        )
    }

    #[test]
    fn title_initial_comes_first() {
        let c = Candidate::new("w", "the wall").with_author("Pink");
        assert_eq!(
            next_probe(&c, &[]),
            Some(HardConfirmProbe::TitleInitial { value: "T".into() })
        );
    }

    #[test]
    fn author_follows_a_used_title_probe() {
        let c = Candidate::new("w", "the wall").with_author(" Pink ");
        let history = vec![miss("w", HardConfirmProbe::TitleInitial { value: "T".into() })];
        assert_eq!(
            next_probe(&c, &history),
            Some(HardConfirmProbe::Author { value: "Pink".into() })
        );
    }

    #[test]
    fn probes_on_other_candidates_do_not_count() {
        let c = Candidate::new("w", "wall");
        let history = vec![miss("other", HardConfirmProbe::TitleInitial { value: "W".into() })];
        assert_eq!(next_probe(&c, &history).unwrap().kind(), ProbeKind::TitleInitial);
    }

    #[test]
    fn exhausted_probes_are_reused() {
        let c = Candidate::new("w", "wall");
        let history = vec![miss("w", HardConfirmProbe::TitleInitial { value: "W".into() })];
        assert_eq!(next_probe(&c, &history).unwrap().kind(), ProbeKind::TitleInitial);
    }

    #[test]
    fn no_title_character_and_no_author_gives_none() {
        let c = Candidate::new("w", "...");
        assert_eq!(next_probe(&c, &[]), None);
    }
}
