//! Tests for the character fetch orchestrator.

use holonet::{
    error::Error,
    service::character::{join_rows, CharacterService},
};
use holonet_test_utils::prelude::*;

mod fetch_character_page {
    use super::*;

    /// Expect one row pairing each character with its resolved homeworld
    #[tokio::test]
    async fn joins_characters_with_homeworlds() -> Result<(), TestError> {
        let mut test = TestSetup::new().await?;
        let base = test.server.url();
        let mut leia = factory::mock_character(&base, 5, 2);
        leia.name = "Leia".to_string();
        let mut alderaan = factory::mock_planet(&base, 2);
        alderaan.name = "Alderaan".to_string();
        let response = factory::list_response(3, None, vec![leia]);
        let people = test.with_people_endpoint(Some(2), &response, 1);
        let planet = test.with_planet_endpoint(2, &alderaan, 1);

        let service = CharacterService::new(&test.client);
        let page = service.fetch_character_page(2).await?;

        assert_eq!(page.number, 2);
        assert_eq!(page.count, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].character.name, "Leia");
        assert_eq!(page.items[0].planet.name, "Alderaan");
        people.assert();
        planet.assert();

        Ok(())
    }

    /// Expect planet order to follow character order across the page
    #[tokio::test]
    async fn preserves_character_order_in_rows() -> Result<(), TestError> {
        let mut test = TestSetup::new().await?;
        let base = test.server.url();
        let characters: Vec<_> = (1..=3)
            .map(|id| factory::mock_character(&base, id, id))
            .collect();
        let planets: Vec<_> = (1..=3).map(|id| factory::mock_planet(&base, id)).collect();
        let response = factory::list_response(3, None, characters.clone());
        let people = test.with_people_endpoint(Some(2), &response, 1);
        for (i, planet) in planets.iter().enumerate() {
            test.with_planet_endpoint(i as u32 + 1, planet, 1);
        }

        let service = CharacterService::new(&test.client);
        let page = service.fetch_character_page(2).await?;

        assert_eq!(page.items.len(), 3);
        for (row, character) in page.items.iter().zip(&characters) {
            assert_eq!(row.character.url, character.url);
            assert_eq!(row.planet.url, character.homeworld);
        }
        people.assert();

        Ok(())
    }

    /// Expect page 1 to be requested without a page parameter
    #[tokio::test]
    async fn requests_first_page_without_parameter() -> Result<(), TestError> {
        let mut test = TestSetup::new().await?;
        let response = factory::list_response(0, None, vec![]);
        let people = test.with_people_endpoint(None, &response, 1);

        let service = CharacterService::new(&test.client);
        let page = service.fetch_character_page(1).await?;

        assert!(page.items.is_empty());
        people.assert();

        Ok(())
    }

    /// Expect an empty page to produce no planet requests
    #[tokio::test]
    async fn skips_planet_fetch_for_empty_page() -> Result<(), TestError> {
        let mut test = TestSetup::new().await?;
        let response = factory::list_response(0, None, vec![]);
        test.with_people_endpoint(Some(9), &response, 1);
        let planet = factory::mock_planet(&test.server.url(), 1);
        let untouched = test.with_planet_endpoint(1, &planet, 0);

        let service = CharacterService::new(&test.client);
        let page = service.fetch_character_page(9).await?;

        assert!(page.items.is_empty());
        untouched.assert();

        Ok(())
    }

    /// Expect the whole page to fail when one homeworld fails to resolve
    #[tokio::test]
    async fn fails_whole_page_on_planet_error() -> Result<(), TestError> {
        let mut test = TestSetup::new().await?;
        let base = test.server.url();
        let character = factory::mock_character(&base, 1, 1);
        let response = factory::list_response(1, None, vec![character]);
        test.with_people_endpoint(Some(2), &response, 1);
        let failing = test.with_error_endpoint("/planets/1/", 404, "not found", 1);

        let service = CharacterService::new(&test.client);
        let result = service.fetch_character_page(2).await;

        assert!(matches!(result, Err(Error::Status(404))));
        failing.assert();

        Ok(())
    }

    /// Expect StatusError to surface when the page itself is missing
    #[tokio::test]
    async fn fails_when_page_endpoint_errors() -> Result<(), TestError> {
        let mut test = TestSetup::new().await?;
        let failing = test.with_error_endpoint("/people", 500, "server error", 1);

        let service = CharacterService::new(&test.client);
        let result = service.fetch_character_page(1).await;

        assert!(matches!(result, Err(Error::Status(500))));
        failing.assert();

        Ok(())
    }
}

mod fetch_filmography {
    use super::*;

    /// Expect films to come back in the character's reference order
    #[tokio::test]
    async fn preserves_film_reference_order() -> Result<(), TestError> {
        let mut test = TestSetup::new().await?;
        let base = test.server.url();
        let films: Vec<_> = (1..=3).map(|id| factory::mock_film(&base, id)).collect();
        for (i, film) in films.iter().enumerate() {
            test.with_film_endpoint(i as u32 + 1, film, 1);
        }
        let mut character = factory::mock_character(&base, 1, 1);
        character.films = vec![
            films[1].url.clone(),
            films[2].url.clone(),
            films[0].url.clone(),
        ];

        let service = CharacterService::new(&test.client);
        let fetched = service.fetch_filmography(&character).await?;

        let titles: Vec<&str> = fetched.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                films[1].title.as_str(),
                films[2].title.as_str(),
                films[0].title.as_str()
            ]
        );

        Ok(())
    }

    /// Expect an empty film list to resolve without any requests
    #[tokio::test]
    async fn returns_empty_for_no_films() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let character = factory::mock_character(&test.server.url(), 1, 1);

        let service = CharacterService::new(&test.client);
        let fetched = service.fetch_filmography(&character).await?;

        assert!(fetched.is_empty());

        Ok(())
    }

    /// Expect the whole filmography to fail when one film fails
    #[tokio::test]
    async fn fails_whole_filmography_on_film_error() -> Result<(), TestError> {
        let mut test = TestSetup::new().await?;
        let base = test.server.url();
        let film = factory::mock_film(&base, 1);
        test.with_film_endpoint(1, &film, 1);
        let failing = test.with_error_endpoint("/films/2/", 404, "not found", 1);
        let mut character = factory::mock_character(&base, 1, 1);
        character.films = vec![
            film.url.clone(),
            url::Url::parse(&format!("{base}/films/2/"))
                .map_err(|e| TestError::Setup(e.to_string()))?,
        ];

        let service = CharacterService::new(&test.client);
        let result = service.fetch_filmography(&character).await;

        assert!(matches!(result, Err(Error::Status(404))));
        failing.assert();

        Ok(())
    }
}

mod join_rows_fn {
    use super::*;

    /// Expect the join to truncate to the shorter input
    #[test]
    fn truncates_to_shorter_side() {
        let base = "https://example.test/api";
        let characters: Vec<_> = (1..=3)
            .map(|id| factory::mock_character(base, id, id))
            .collect();
        let planets: Vec<_> = (1..=2).map(|id| factory::mock_planet(base, id)).collect();

        let rows = join_rows(characters.clone(), planets);

        assert_eq!(rows.len(), 2);

        let rows = join_rows(characters[..1].to_vec(), vec![]);

        assert!(rows.is_empty());
    }

    /// Expect pairing to be positional, not keyed by URL
    #[test]
    fn pairs_by_position() {
        let base = "https://example.test/api";
        let characters: Vec<_> = (1..=2)
            .map(|id| factory::mock_character(base, id, id))
            .collect();
        // Deliberately reversed relative to the characters' homeworlds.
        let planets = vec![factory::mock_planet(base, 2), factory::mock_planet(base, 1)];

        let rows = join_rows(characters, planets.clone());

        assert_eq!(rows[0].planet.url, planets[0].url);
        assert_eq!(rows[1].planet.url, planets[1].url);
    }
}
