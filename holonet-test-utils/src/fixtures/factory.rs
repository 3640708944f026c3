//! Factories for upstream entity records with standard test data.

use chrono::{DateTime, NaiveDate, Utc};
use holonet::model::{
    character::{Character, Gender},
    film::Film,
    page::ListResponse,
    planet::Planet,
};
use url::Url;

/// Canonical entity URL in the upstream's `{base}/{kind}/{id}/` shape.
pub fn entity_url(base_url: &str, kind: &str, id: u32) -> Url {
    Url::parse(&format!("{base_url}/{kind}/{id}/")).unwrap()
}

fn timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2014-12-09T13:50:51.644Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Create a mock character with default test values.
///
/// The character is named `Character {id}` and references
/// `{base_url}/planets/{homeworld_id}/` as its homeworld. Its URL lists
/// start empty so tests opt into references explicitly.
pub fn mock_character(base_url: &str, id: u32, homeworld_id: u32) -> Character {
    Character {
        name: format!("Character {id}"),
        height: "172".to_string(),
        mass: "77".to_string(),
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue".to_string(),
        birth_year: "19BBY".to_string(),
        gender: Gender::Male,
        homeworld: entity_url(base_url, "planets", homeworld_id),
        films: vec![],
        species: vec![],
        vehicles: vec![],
        starships: vec![],
        created: timestamp(),
        edited: timestamp(),
        url: entity_url(base_url, "people", id),
    }
}

/// Create a mock planet with default test values.
pub fn mock_planet(base_url: &str, id: u32) -> Planet {
    Planet {
        name: format!("Planet {id}"),
        rotation_period: "24".to_string(),
        orbital_period: "364".to_string(),
        diameter: "12500".to_string(),
        climate: "temperate".to_string(),
        gravity: "1 standard".to_string(),
        terrain: "grasslands, mountains".to_string(),
        surface_water: "40".to_string(),
        population: "2000000000".to_string(),
        residents: vec![],
        films: vec![],
        created: timestamp(),
        edited: timestamp(),
        url: entity_url(base_url, "planets", id),
    }
}

/// Create a mock film with default test values.
pub fn mock_film(base_url: &str, id: u32) -> Film {
    Film {
        title: format!("Film {id}"),
        episode_id: i64::from(id),
        opening_crawl: "It is a period of civil war.".to_string(),
        director: "George Lucas".to_string(),
        producer: "Gary Kurtz, Rick McCallum".to_string(),
        release_date: NaiveDate::from_ymd_opt(1977, 5, 25).unwrap(),
        characters: vec![],
        planets: vec![],
        starships: vec![],
        vehicles: vec![],
        species: vec![],
        created: timestamp(),
        edited: timestamp(),
        url: entity_url(base_url, "films", id),
    }
}

/// Wrap results in the upstream's paginated list shape.
pub fn list_response<T>(count: u64, next: Option<String>, results: Vec<T>) -> ListResponse<T> {
    ListResponse {
        count,
        next,
        previous: None,
        results,
    }
}
