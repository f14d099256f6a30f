use serde::{Deserialize, Serialize};

/// One guessable item, as supplied by the catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub popularity_base: f64,
    #[serde(default)]
    pub popularity_play_bonus: f64,
}

impl Candidate {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: None,
            popularity_base: 0.0,
            popularity_play_bonus: 0.0,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_popularity(mut self, base: f64, play_bonus: f64) -> Self {
        self.popularity_base = base;
        self.popularity_play_bonus = play_bonus;
        self
    }

    pub fn title_initial(&self) -> Option<String> {
        title_initial(&self.title)
    }
}

/// Normalized leading character of a title: the first alphanumeric
/// character, upper-cased. Leading quotes, brackets and spaces are skipped.
pub fn title_initial(title: &str) -> Option<String> {
    title
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
}
