use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SessionError;

/// One of the six qualitative answers a player can give.
///
/// `Unknown` and `DontCare` share the neutral strength but stay distinct
/// in history so analytics can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    Probably,
    Unknown,
    DontCare,
    ProbablyNot,
    No,
}

impl Answer {
    pub const ALL: [Answer; 6] = [
        Answer::Yes,
        Answer::Probably,
        Answer::Unknown,
        Answer::DontCare,
        Answer::ProbablyNot,
        Answer::No,
    ];

    /// Numeric strength in {-1.0, -0.6, 0.0, 0.6, 1.0}.
    pub fn strength(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::Probably => 0.6,
            Self::Unknown | Self::DontCare => 0.0,
            Self::ProbablyNot => -0.6,
            Self::No => -1.0,
        }
    }

    pub fn is_affirmative(self) -> bool {
        self.strength() > 0.0
    }

    pub fn is_negative(self) -> bool {
        self.strength() < 0.0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Probably => "probably",
            Self::Unknown => "unknown",
            Self::DontCare => "dont_care",
            Self::ProbablyNot => "probably_not",
            Self::No => "no",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Answer {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| SessionError::InvalidAnswer {
                value: s.to_string(),
            })
    }
}
