use crate::error::Result;
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{Event, Film, Language, Rate};
use async_graphql::{Context, ErrorExtensions, FieldResult, Object, PathSegment};

/// Record an upstream failure against the current field and resolve it to null,
/// leaving sibling fields in the same request untouched.
fn scoped<T>(ctx: &Context<'_>, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            let mut error = e.extend().into_server_error(ctx.item.pos);
            error.path = ctx
                .path_node
                .as_ref()
                .map(|node| node.to_string_vec())
                .unwrap_or_default()
                .into_iter()
                .map(PathSegment::Field)
                .collect();
            ctx.add_error(error);
            None
        }
    }
}

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// Get every film in the catalog
    async fn get_films(&self, ctx: &Context<'_>) -> FieldResult<Vec<Film>> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(context.catalog.list_films().into_iter().map(Film::from).collect())
    }

    /// Get the films whose author matches exactly
    async fn get_film_by_author_name(
        &self,
        ctx: &Context<'_>,
        author_name: String,
    ) -> FieldResult<Vec<Film>> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(context
            .catalog
            .find_by_author(Some(&author_name))
            .into_iter()
            .map(Film::from)
            .collect())
    }

    /// Current NBP table A mid rates.
    ///
    /// Upstream-backed fields are nullable so a failing provider only nulls
    /// its own field.
    async fn get_rates(&self, ctx: &Context<'_>) -> FieldResult<Option<Vec<Rate>>> {
        let context = ctx.data::<GraphQLContext>()?;

        let rates = scoped(ctx, context.providers.fetch_rates().await);
        Ok(rates.map(|rates| rates.into_iter().map(Rate::from).collect()))
    }

    /// Chamber of Deputies events, ascending by start time
    #[graphql(name = "getEventInBR")]
    async fn get_event_in_br(&self, ctx: &Context<'_>) -> FieldResult<Option<Vec<Event>>> {
        let context = ctx.data::<GraphQLContext>()?;

        let events = scoped(ctx, context.providers.fetch_events().await);
        Ok(events.map(|events| events.into_iter().map(Event::from).collect()))
    }

    /// Languages known to the CountryInfo service, by name
    async fn get_languages_by_name(
        &self,
        ctx: &Context<'_>,
    ) -> FieldResult<Option<Vec<Language>>> {
        let context = ctx.data::<GraphQLContext>()?;

        let languages = scoped(ctx, context.providers.fetch_languages().await);
        Ok(languages.map(|languages| languages.into_iter().map(Language::from).collect()))
    }
}
