use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::{character::Character, planet::Planet};

/// One unit of paginated list results as returned by the upstream API.
///
/// `next` and `previous` are opaque cursor URLs; both are null at the
/// respective ends of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A fetched page of `T` plus the request context that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// 1-based page index that produced this page.
    pub number: u32,
    /// Total-count hint reported by the upstream source.
    pub count: u64,
    pub items: Vec<T>,
}

/// One character paired with its resolved homeworld for list display.
///
/// Only constructed from a successfully decoded character/planet pair; a
/// failed planet resolution fails the whole page instead of producing a row
/// with missing data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CharacterRow {
    pub character: Character,
    pub planet: Planet,
}

impl CharacterRow {
    /// Stable key for ordering and diffing rows.
    pub fn key(&self) -> (&Url, &Url) {
        (&self.character.url, &self.planet.url)
    }
}
