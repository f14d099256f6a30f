use serde::{Deserialize, Serialize};

/// Where a feature's incidence came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSource {
    /// Hand-curated. Every incidence is present.
    #[default]
    Curated,
    /// Machine-derived. Incidence is present only at or above the
    /// configured confidence threshold.
    Derived,
}

/// A tag a candidate may carry. Immutable for the life of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub key: String,
    /// Human display text, resolved further by the presentation layer.
    pub display: String,
    #[serde(default)]
    pub source: FeatureSource,
    #[serde(default)]
    pub category: Option<String>,
    /// Feature-level confidence for derived features, used when an
    /// incidence row carries none of its own.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl Feature {
    pub fn curated(key: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display: display.into(),
            source: FeatureSource::Curated,
            category: None,
            confidence: None,
        }
    }

    pub fn derived(key: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            source: FeatureSource::Derived,
            ..Self::curated(key, display)
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}
