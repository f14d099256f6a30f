use serde::{Deserialize, Serialize};

use super::FeatureSource;

/// Player's choice, made at session start, on whether machine-derived
/// features may be asked about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiGate {
    #[default]
    Allow,
    Deny,
}

impl AiGate {
    pub fn allows(self, source: FeatureSource) -> bool {
        match self {
            Self::Allow => true,
            Self::Deny => source == FeatureSource::Curated,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}
