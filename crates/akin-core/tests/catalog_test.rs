use akin_core::errors::CatalogError;
use akin_core::models::{Candidate, Catalog, Feature};

fn sample() -> Catalog {
    Catalog::builder()
        .candidate(Candidate::new("work_002", "Beta"))
        .candidate(Candidate::new("work_001", "Alpha").with_author("Ann"))
        .feature(Feature::curated("tag_b", "Is it blue?"))
        .feature(Feature::curated("tag_a", "Is it animated?"))
        .feature(Feature::derived("tag_ai", "Is it gloomy?"))
        .feature(Feature::derived("tag_ai_fallback", "Is it long?").with_confidence(0.9))
        .tag("work_001", "tag_a")
        .incidence("work_001", "tag_ai", Some(0.8))
        .incidence("work_002", "tag_ai", Some(0.3))
        .incidence("work_002", "tag_b", None)
        .incidence("work_001", "tag_ai_fallback", None)
        .build()
        .unwrap()
}

#[test]
fn candidates_and_features_iterate_sorted() {
    let catalog = sample();
    let ids: Vec<_> = catalog.candidates().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["work_001", "work_002"]);
    let keys: Vec<_> = catalog.features().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["tag_a", "tag_ai", "tag_ai_fallback", "tag_b"]);
}

#[test]
fn curated_incidence_is_always_present() {
    let catalog = sample();
    assert!(catalog.has_feature("work_001", "tag_a", 0.99));
    assert!(!catalog.has_feature("work_002", "tag_a", 0.0));
}

#[test]
fn derived_incidence_is_thresholded() {
    let catalog = sample();
    assert!(catalog.has_feature("work_001", "tag_ai", 0.8));
    assert!(!catalog.has_feature("work_001", "tag_ai", 0.81));
    assert!(!catalog.has_feature("work_002", "tag_ai", 0.5));
}

#[test]
fn derived_incidence_falls_back_to_feature_confidence() {
    let catalog = sample();
    assert!(catalog.has_feature("work_001", "tag_ai_fallback", 0.5));
    assert!(!catalog.has_feature("work_001", "tag_ai_fallback", 0.95));
}

#[test]
fn derived_incidence_without_any_confidence_is_absent() {
    let catalog = Catalog::builder()
        .candidate(Candidate::new("w", "W"))
        .feature(Feature::derived("d", "D"))
        .incidence("w", "d", None)
        .build()
        .unwrap();
    assert!(!catalog.has_feature("w", "d", 0.0));
}

#[test]
fn features_of_lists_present_keys() {
    let catalog = sample();
    assert_eq!(
        catalog.features_of("work_001", 0.6),
        vec!["tag_a", "tag_ai", "tag_ai_fallback"]
    );
}

#[test]
fn builder_rejects_bad_input() {
    assert!(matches!(Catalog::builder().build(), Err(CatalogError::Empty)));

    let dup = Catalog::builder()
        .candidate(Candidate::new("a", "A"))
        .candidate(Candidate::new("a", "A again"))
        .build();
    assert!(matches!(dup, Err(CatalogError::DuplicateCandidate { .. })));

    let unknown = Catalog::builder()
        .candidate(Candidate::new("a", "A"))
        .tag("a", "missing")
        .build();
    assert!(matches!(unknown, Err(CatalogError::UnknownFeature { .. })));

    let range = Catalog::builder()
        .candidate(Candidate::new("a", "A"))
        .feature(Feature::derived("d", "D"))
        .incidence("a", "d", Some(1.5))
        .build();
    assert!(matches!(range, Err(CatalogError::ConfidenceOutOfRange { .. })));
}

#[test]
fn json_snapshot_decodes() {
    let json = r#"{
        "candidates": [
            { "id": "w1", "title": "One", "popularity_base": 1.0 },
            { "id": "w2", "title": "Two", "author": "Zed" }
        ],
        "features": [
            { "key": "k", "display": "K?" },
            { "key": "d", "display": "D?", "source": "derived" }
        ],
        "incidence": [
            { "candidate": "w1", "feature": "k" },
            { "candidate": "w2", "feature": "d", "confidence": 0.7 }
        ]
    }"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.candidate("w1").unwrap().popularity_base, 1.0);
    assert_eq!(catalog.candidate("w2").unwrap().author.as_deref(), Some("Zed"));
    assert!(catalog.has_feature("w2", "d", 0.7));

    let back = Catalog::from_snapshot(catalog.to_snapshot()).unwrap();
    assert_eq!(back.len(), 2);
    assert!(back.has_feature("w1", "k", 1.0));
}

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(
        Catalog::from_json("{ not json"),
        Err(CatalogError::ParseError { .. })
    ));
}
