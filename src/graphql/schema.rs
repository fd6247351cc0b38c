use crate::apis::Providers;
use crate::catalog::CatalogStore;
use crate::graphql::resolvers::{Mutation, Query};
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub catalog: CatalogStore,
    pub providers: Arc<Providers>,
}

/// The complete GraphQL schema
pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

/// Create a new GraphQL schema over the catalog and upstream providers
pub fn create_schema(catalog: CatalogStore, providers: Arc<Providers>) -> GraphQLSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(GraphQLContext { catalog, providers })
        .finish()
}
