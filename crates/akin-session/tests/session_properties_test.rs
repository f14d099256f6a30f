use akin_core::config::{AkinConfig, CoverageMode};
use akin_core::models::{AiGate, Answer, Candidate, Catalog, Feature, SessionPhase};
use akin_session::SessionMachine;
use proptest::prelude::*;

fn config() -> AkinConfig {
    let mut config = AkinConfig::default();
    config.coverage.mode = CoverageMode::Ratio;
    config.coverage.min_ratio = Some(0.0);
    config.coverage.min_works = None;
    config.coverage.max_ratio = None;
    config
}

fn catalog(popularity: &[f64]) -> Catalog {
    let mut builder = Catalog::builder()
        .feature(Feature::curated("tag_a", "A?"))
        .feature(Feature::curated("tag_b", "B?"))
        .feature(Feature::curated("tag_c", "C?"));
    for (i, &pop) in popularity.iter().enumerate() {
        let id = format!("work_{i:03}");
        let candidate = Candidate::new(id.clone(), format!("Title {i}")).with_popularity(pop, 0.0);
        builder = builder.candidate(candidate);
        if i % 2 == 0 {
            builder = builder.tag(id.clone(), "tag_a");
        }
        if i % 3 == 0 {
            builder = builder.tag(id.clone(), "tag_b");
        }
        if i == 1 {
            builder = builder.tag(id, "tag_c");
        }
    }
    builder.build().unwrap()
}

fn neutral() -> impl Strategy<Value = Answer> {
    prop_oneof![Just(Answer::Unknown), Just(Answer::DontCare)]
}

fn any_answer() -> impl Strategy<Value = Answer> {
    prop::sample::select(Answer::ALL.to_vec())
}

proptest! {
    #[test]
    fn neutral_tag_answers_leave_weights_unchanged(
        popularity in prop::collection::vec(0.0f64..5.0, 4..8),
        answers in prop::collection::vec(neutral(), 1..=3),
    ) {
        let config = config();
        let catalog = catalog(&popularity);
        let machine = SessionMachine::new(&config, &catalog);
        let (mut session, _) = machine.start("p", AiGate::Allow).unwrap();
        let start = session.weights.clone();
        for answer in answers {
            let pending = session.pending.clone();
            prop_assume!(pending.is_some_and(|q| q.tag().is_some()));
            machine.answer(&mut session, answer).unwrap();
            prop_assert_eq!(&session.weights, &start);
        }
    }

    #[test]
    fn every_session_terminates_within_the_question_limit(
        popularity in prop::collection::vec(0.0f64..5.0, 3..8),
        answers in prop::collection::vec(any_answer(), 40),
    ) {
        let mut config = config();
        config.limits.max_questions = 12;
        let catalog = catalog(&popularity);
        let machine = SessionMachine::new(&config, &catalog);
        let (mut session, _) = machine.start("p", AiGate::Allow).unwrap();

        for answer in answers {
            if session.is_terminal() || session.phase == SessionPhase::FailList {
                break;
            }
            machine.answer(&mut session, answer).unwrap();
            prop_assert!(session.question_count <= config.limits.max_questions);
            prop_assert!(session.weights.values().all(|w| w.is_finite() && *w > 0.0));
            let confidence = machine.belief(&session).confidence;
            prop_assert!(confidence > 0.0 && confidence <= 1.0);
        }
        prop_assert!(session.is_terminal() || session.phase == SessionPhase::FailList);
    }
}
