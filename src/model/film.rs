use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A film entity from the upstream dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub episode_id: i64,
    /// Narrative text shown at the start of the film.
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: NaiveDate,
    pub characters: Vec<Url>,
    pub planets: Vec<Url>,
    pub starships: Vec<Url>,
    pub vehicles: Vec<Url>,
    pub species: Vec<Url>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
    /// Canonical identity of this film.
    pub url: Url,
}

impl Film {
    /// Number of words in the opening crawl.
    ///
    /// A word is a maximal run of letters; the text is split on every
    /// non-letter character and empty segments are not counted, so runs of
    /// punctuation collapse into a single boundary.
    pub fn opening_crawl_word_count(&self) -> usize {
        self.opening_crawl
            .split(|c: char| !c.is_alphabetic())
            .filter(|segment| !segment.is_empty())
            .count()
    }
}
