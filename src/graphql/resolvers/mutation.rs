use crate::domain::{Film as DomainFilm, FilmInput as DomainFilmInput};
use crate::graphql::types::{Film, FilmInput};
use async_graphql::{ErrorExtensions, FieldResult, Object};

/// Root mutation object for GraphQL
pub struct Mutation;

#[Object]
impl Mutation {
    /// Validate a film and echo it back. Nothing is stored; `getFilms` is unaffected.
    ///
    /// Stricter than a plain echo: a blank or whitespace-only `title` or
    /// `author` is rejected with `VALIDATION_ERROR`.
    async fn insert_film(&self, input: FilmInput) -> FieldResult<Film> {
        let film = DomainFilm::try_from(DomainFilmInput::from(input)).map_err(|e| e.extend())?;
        tracing::info!("Echoing film: {} ({})", film.title, film.release_date);
        Ok(film.into())
    }
}
