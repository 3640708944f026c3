use url::Url;

use crate::{
    client::ApiClient,
    error::Error,
    model::{
        character::Character,
        film::Film,
        page::{CharacterRow, ListResponse, Page},
        planet::Planet,
    },
};

/// Orchestrator for the composite character fetches.
///
/// Expressed purely in terms of the client's primitives: one page fetch,
/// one ordered fan-out, one positional join. Every operation is
/// all-or-nothing; the first client error aborts the composite and is
/// surfaced verbatim.
pub struct CharacterService<'a> {
    client: &'a ApiClient,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetches one page of characters joined with their resolved homeworlds.
    ///
    /// The homeworld fan-out does not begin until the character page has
    /// arrived, and preserves the character order, so planet *i* belongs to
    /// character *i*. Page 1 is requested without a page parameter to match
    /// the upstream's canonical first-page URL.
    pub async fn fetch_character_page(&self, page: u32) -> Result<Page<CharacterRow>, Error> {
        let url = if page <= 1 {
            self.client.list_url("people", &[])?
        } else {
            let number = page.to_string();
            self.client.list_url("people", &[("page", number.as_str())])?
        };

        let response: ListResponse<Character> = self.client.fetch_one(url).await?;

        let homeworlds: Vec<Url> = response
            .results
            .iter()
            .map(|character| character.homeworld.clone())
            .collect();
        let planets: Vec<Planet> = self.client.fetch_all(&homeworlds).await?;

        let rows = join_rows(response.results, planets);

        tracing::debug!(page, rows = rows.len(), "fetched character page");

        Ok(Page {
            number: page,
            count: response.count,
            items: rows,
        })
    }

    /// Fetches the films referenced by a character, preserving input order.
    pub async fn fetch_filmography(&self, character: &Character) -> Result<Vec<Film>, Error> {
        self.client.fetch_all(&character.films).await
    }
}

/// Pairs each character with the planet fetched for the same position.
///
/// Output length is the shorter of the two inputs. The composing fetch path
/// cannot produce unequal lengths because the planet fan-out is
/// all-or-nothing, so a mismatch here means an upstream invariant broke and
/// is logged.
pub fn join_rows(characters: Vec<Character>, planets: Vec<Planet>) -> Vec<CharacterRow> {
    if characters.len() != planets.len() {
        tracing::warn!(
            characters = characters.len(),
            planets = planets.len(),
            "character/planet length mismatch, truncating to shorter side"
        );
    }

    characters
        .into_iter()
        .zip(planets)
        .map(|(character, planet)| CharacterRow { character, planet })
        .collect()
}
