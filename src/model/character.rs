use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A person entity from the upstream dataset.
///
/// The `homeworld` and per-category URL lists reference other entities by
/// their canonical URLs; the lists preserve upstream order. Physical
/// attributes stay as strings because the upstream API mixes numerals with
/// values like `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: Gender,
    /// URL reference to this character's home planet.
    pub homeworld: Url,
    pub films: Vec<Url>,
    pub species: Vec<Url>,
    pub vehicles: Vec<Url>,
    pub starships: Vec<Url>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
    /// Canonical identity of this character.
    pub url: Url,
}

/// Gender as enumerated by the upstream schema.
///
/// These five values are the full upstream vocabulary; any other wire value
/// fails the decode of the surrounding record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Hermaphrodite,
    None,
    #[serde(rename = "n/a")]
    NotAvailable,
}
