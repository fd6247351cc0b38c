use crate::domain::{Film as DomainFilm, FilmInput as DomainFilmInput};
use async_graphql::{InputObject, Object};

/// GraphQL representation of a Film
#[derive(Clone)]
pub struct Film {
    pub inner: DomainFilm,
}

impl From<DomainFilm> for Film {
    fn from(film: DomainFilm) -> Self {
        Self { inner: film }
    }
}

#[Object]
impl Film {
    /// The film title
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// The credited director
    async fn author(&self) -> &str {
        &self.inner.author
    }

    /// Co-authors; empty when there are none
    #[graphql(name = "co_author")]
    async fn co_author(&self) -> Vec<String> {
        self.inner.co_author.clone()
    }

    /// Release year
    #[graphql(name = "release_date")]
    async fn release_date(&self) -> i32 {
        self.inner.release_date
    }
}

/// Input for the `insertFilm` mutation
#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct FilmInput {
    pub title: String,
    pub author: String,
    pub co_author: Option<Vec<String>>,
    pub release_date: i32,
}

impl From<FilmInput> for DomainFilmInput {
    fn from(input: FilmInput) -> Self {
        Self {
            title: input.title,
            author: input.author,
            co_author: input.co_author,
            release_date: input.release_date,
        }
    }
}
