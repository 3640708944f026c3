use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A planet entity from the upstream dataset.
///
/// Environmental and demographic attributes stay as strings for the same
/// reason as on `Character`: the upstream API mixes numerals with values
/// like `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    pub residents: Vec<Url>,
    pub films: Vec<Url>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
    /// Canonical identity of this planet.
    pub url: Url,
}
