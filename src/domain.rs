use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub author: String,
    pub co_author: Vec<String>,
    pub release_date: i32,
}

/// Film as submitted to the `insertFilm` mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmInput {
    pub title: String,
    pub author: String,
    pub co_author: Option<Vec<String>>,
    pub release_date: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub code: String,
    pub currency: String,
    pub mid: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub uri: String,
    pub description: String,
    pub description_type: String,
    pub start_time: String,
    /// Absent for ongoing events
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub iso_code: String,
    pub name: String,
}

impl TryFrom<FilmInput> for Film {
    type Error = GatewayError;

    fn try_from(input: FilmInput) -> Result<Self> {
        if input.title.trim().is_empty() {
            return Err(GatewayError::Validation("title must not be blank".into()));
        }
        if input.author.trim().is_empty() {
            return Err(GatewayError::Validation("author must not be blank".into()));
        }

        Ok(Film {
            title: input.title,
            author: input.author,
            co_author: input.co_author.unwrap_or_default(),
            release_date: input.release_date,
        })
    }
}
