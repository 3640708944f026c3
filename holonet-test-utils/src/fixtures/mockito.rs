//! Mock HTTP endpoint creation utilities.
//!
//! These builders register endpoints with the mockito server owned by
//! [`TestSetup`] and verify they were called the expected number of times
//! when asserted.

use holonet::model::{
    character::Character,
    film::Film,
    page::ListResponse,
    planet::Planet,
};
use mockito::{Matcher, Mock};

use crate::setup::TestSetup;

impl TestSetup {
    /// Mock `GET /people`, optionally matching a `page` query parameter.
    ///
    /// Pass `None` for the canonical first-page request, which carries no
    /// query string.
    pub fn with_people_endpoint(
        &mut self,
        page: Option<u32>,
        response: &ListResponse<Character>,
        expected_requests: usize,
    ) -> Mock {
        let mock = self.server.mock("GET", "/people");
        let mock = match page {
            Some(page) => mock.match_query(Matcher::UrlEncoded("page".into(), page.to_string())),
            None => mock,
        };

        mock.with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(response).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /people/{id}/` returning the given character.
    pub fn with_character_endpoint(
        &mut self,
        id: u32,
        character: &Character,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/people/{id}/");

        self.server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(character).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /planets/{id}/` returning the given planet.
    pub fn with_planet_endpoint(
        &mut self,
        id: u32,
        planet: &Planet,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/planets/{id}/");

        self.server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(planet).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /films/{id}/` returning the given film.
    pub fn with_film_endpoint(&mut self, id: u32, film: &Film, expected_requests: usize) -> Mock {
        let path = format!("/films/{id}/");

        self.server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(film).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Mock any path with an arbitrary status and raw body.
    pub fn with_error_endpoint(
        &mut self,
        path: &str,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(status)
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
