//! Philosopher records as produced by the content service.

use serde::{Deserialize, Serialize};

/// Minimal philosopher record used for the list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhilosopherSummary {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub era: String,
    pub school: String,
}

/// Detail-only fields returned by the service, before merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailFields {
    pub bio: String,
    pub famous_works: Vec<String>,
    pub quotes: Vec<String>,
    pub core_ideas: Vec<String>,
}

/// Full philosopher record: the summary plus biography, works, quotes and ideas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhilosopherDetail {
    #[serde(flatten)]
    pub summary: PhilosopherSummary,
    pub bio: String,
    pub famous_works: Vec<String>,
    pub quotes: Vec<String>,
    pub core_ideas: Vec<String>,
}

impl PhilosopherDetail {
    /// Merge service-provided fields onto `summary`.
    ///
    /// Summary fields always win: `DetailFields` cannot carry identity keys,
    /// so anything like `name` in the raw response never reaches the record.
    pub fn merge(summary: PhilosopherSummary, fields: DetailFields) -> Self {
        Self {
            summary,
            bio: fields.bio,
            famous_works: fields.famous_works,
            quotes: fields.quotes,
            core_ideas: fields.core_ideas,
        }
    }

    /// Biography split into display paragraphs, one per line of `bio`.
    pub fn bio_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.bio.split('\n').map(str::trim).filter(|p| !p.is_empty())
    }
}
