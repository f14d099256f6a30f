//! Read-only catalog snapshot: candidates, features, and their incidence.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{Candidate, Feature, FeatureSource};
use crate::errors::CatalogError;

/// One `{candidate, feature, confidence?}` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incidence {
    pub candidate: String,
    pub feature: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Wire form of a catalog, as handed over by the persistence layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub candidates: Vec<Candidate>,
    pub features: Vec<Feature>,
    #[serde(default)]
    pub incidence: Vec<Incidence>,
}

/// Immutable, validated catalog. Safe to share across sessions and threads.
///
/// Candidates are stored sorted by id so every iteration is in
/// lexicographic id order.
#[derive(Debug, Clone)]
pub struct Catalog {
    candidates: Vec<Candidate>,
    candidate_index: HashMap<String, usize>,
    features: BTreeMap<String, Feature>,
    /// candidate id → feature key → incidence confidence.
    incidence: HashMap<String, HashMap<String, Option<f64>>>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Decode and validate a JSON-encoded [`CatalogSnapshot`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let snapshot: CatalogSnapshot =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
                message: e.to_string(),
            })?;
        Self::from_snapshot(snapshot)
    }

    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, CatalogError> {
        let mut builder = CatalogBuilder::default();
        for candidate in snapshot.candidates {
            builder = builder.candidate(candidate);
        }
        for feature in snapshot.features {
            builder = builder.feature(feature);
        }
        for row in snapshot.incidence {
            builder = builder.incidence(row.candidate, row.feature, row.confidence);
        }
        builder.build()
    }

    /// Back to wire form. Incidence rows come out sorted by (candidate, feature).
    pub fn to_snapshot(&self) -> CatalogSnapshot {
        let mut incidence: Vec<Incidence> = self
            .incidence
            .iter()
            .flat_map(|(candidate, row)| {
                row.iter().map(move |(feature, confidence)| Incidence {
                    candidate: candidate.clone(),
                    feature: feature.clone(),
                    confidence: *confidence,
                })
            })
            .collect();
        incidence.sort_by(|a, b| {
            a.candidate
                .cmp(&b.candidate)
                .then_with(|| a.feature.cmp(&b.feature))
        });
        CatalogSnapshot {
            candidates: self.candidates.clone(),
            features: self.features.values().cloned().collect(),
            incidence,
        }
    }

    /// All candidates, sorted by id.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidate_index.get(id).map(|&i| &self.candidates[i])
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// All features, sorted by key.
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }

    pub fn feature(&self, key: &str) -> Option<&Feature> {
        self.features.get(key)
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Raw incidence row, if any. The outer `Option` is "row exists",
    /// the inner one is the row's confidence.
    pub fn incidence(&self, candidate_id: &str, feature_key: &str) -> Option<Option<f64>> {
        self.incidence
            .get(candidate_id)
            .and_then(|row| row.get(feature_key))
            .copied()
    }

    /// Whether `candidate_id` carries `feature_key`.
    ///
    /// Curated rows are always present. Derived rows are present iff their
    /// confidence (falling back to the feature's own) is at least
    /// `derived_threshold`; unknown confidence means absent.
    pub fn has_feature(&self, candidate_id: &str, feature_key: &str, derived_threshold: f64) -> bool {
        let Some(row_confidence) = self.incidence(candidate_id, feature_key) else {
            return false;
        };
        let Some(feature) = self.features.get(feature_key) else {
            return false;
        };
        match feature.source {
            FeatureSource::Curated => true,
            FeatureSource::Derived => row_confidence
                .or(feature.confidence)
                .is_some_and(|c| c >= derived_threshold),
        }
    }

    /// Keys of every feature the candidate carries, sorted.
    pub fn features_of(&self, candidate_id: &str, derived_threshold: f64) -> Vec<&str> {
        self.features
            .keys()
            .filter(|key| self.has_feature(candidate_id, key, derived_threshold))
            .map(String::as_str)
            .collect()
    }

    /// A catalog restricted to the given candidate ids. Features are kept
    /// whole; incidence rows of dropped candidates go with them.
    pub fn subset(&self, candidate_ids: &[String]) -> Result<Self, CatalogError> {
        let mut builder = CatalogBuilder::default();
        for id in candidate_ids {
            let candidate = self
                .candidate(id)
                .ok_or_else(|| CatalogError::UnknownCandidate { id: id.clone() })?;
            builder = builder.candidate(candidate.clone());
        }
        for feature in self.features.values() {
            builder = builder.feature(feature.clone());
        }
        for id in candidate_ids {
            if let Some(row) = self.incidence.get(id) {
                for (feature, confidence) in row {
                    builder = builder.incidence(id.clone(), feature.clone(), *confidence);
                }
            }
        }
        builder.build()
    }
}

/// Collects candidates, features and incidence, then validates them as a whole.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    candidates: Vec<Candidate>,
    features: Vec<Feature>,
    incidence: Vec<Incidence>,
}

impl CatalogBuilder {
    pub fn candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    pub fn incidence(
        mut self,
        candidate: impl Into<String>,
        feature: impl Into<String>,
        confidence: Option<f64>,
    ) -> Self {
        self.incidence.push(Incidence {
            candidate: candidate.into(),
            feature: feature.into(),
            confidence,
        });
        self
    }

    /// Shorthand for a curated incidence row.
    pub fn tag(self, candidate: impl Into<String>, feature: impl Into<String>) -> Self {
        self.incidence(candidate, feature, None)
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        if self.candidates.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut candidates = self.candidates;
        candidates.sort_by(|a, b| a.id.cmp(&b.id));
        let mut candidate_index = HashMap::with_capacity(candidates.len());
        for (i, candidate) in candidates.iter().enumerate() {
            if candidate_index.insert(candidate.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCandidate {
                    id: candidate.id.clone(),
                });
            }
        }

        let mut features = BTreeMap::new();
        for feature in self.features {
            check_confidence(&format!("feature {}", feature.key), feature.confidence)?;
            if features.contains_key(&feature.key) {
                return Err(CatalogError::DuplicateFeature { key: feature.key });
            }
            features.insert(feature.key.clone(), feature);
        }

        let mut incidence: HashMap<String, HashMap<String, Option<f64>>> = HashMap::new();
        for row in self.incidence {
            if !candidate_index.contains_key(&row.candidate) {
                return Err(CatalogError::UnknownCandidate { id: row.candidate });
            }
            if !features.contains_key(&row.feature) {
                return Err(CatalogError::UnknownFeature { key: row.feature });
            }
            check_confidence(
                &format!("{} / {}", row.candidate, row.feature),
                row.confidence,
            )?;
            incidence
                .entry(row.candidate)
                .or_default()
                .insert(row.feature, row.confidence);
        }

        Ok(Catalog {
            candidates,
            candidate_index,
            features,
            incidence,
        })
    }
}

fn check_confidence(what: &str, confidence: Option<f64>) -> Result<(), CatalogError> {
    match confidence {
        Some(value) if !(0.0..=1.0).contains(&value) => Err(CatalogError::ConfidenceOutOfRange {
            what: what.to_string(),
            value,
        }),
        _ => Ok(()),
    }
}
