use akin_core::config::AkinConfig;
use akin_core::models::{AiGate, Candidate, Catalog, Feature};
use akin_scoring::{initial_weights, normalize};
use akin_selection::{QuestionSelector, SelectionContext};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_catalog(works: usize, tags: usize) -> Catalog {
    let mut builder = Catalog::builder();
    for w in 0..works {
        builder = builder.candidate(Candidate::new(format!("work_{w:05}"), format!("Work {w}")));
    }
    for t in 0..tags {
        let feature = if t % 4 == 0 {
            Feature::derived(format!("tag_{t:03}"), format!("Tag {t}?")).with_confidence(0.7)
        } else {
            Feature::curated(format!("tag_{t:03}"), format!("Tag {t}?"))
        };
        builder = builder.feature(feature);
    }
    for w in 0..works {
        for t in 0..tags {
            if (w * 13 + t * 11) % 6 == 0 {
                builder = builder.tag(format!("work_{w:05}"), format!("tag_{t:03}"));
            }
        }
    }
    builder.build().expect("synthetic catalog is valid")
}

fn bench_selection(c: &mut Criterion) {
    let config = AkinConfig::default();
    let catalog = synthetic_catalog(5_000, 200);
    let probabilities = normalize(&initial_weights(&catalog, &config.scoring));
    let selector = QuestionSelector::new(&config, &catalog);
    let ctx = SelectionContext {
        next_index: 1,
        answered: 0,
        ai_gate: AiGate::Allow,
        history: &[],
        after_miss: false,
    };

    c.bench_function("select_explore_5000x200", |b| {
        b.iter(|| selector.select_explore(black_box(&probabilities), &ctx))
    });

    c.bench_function("next_question_5000x200", |b| {
        b.iter(|| selector.next_question(black_box(&probabilities), &ctx))
    });
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
