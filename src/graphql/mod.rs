//! GraphQL API for Roster.
//!
//! CRUD over the person store. Nested `friends` are resolved lazily, so a
//! client can walk the friend graph as deep as it likes.
//!
//! ## Example
//!
//! ```graphql
//! # One person with their friends
//! { person(id: 2) { name friends { name } } }
//!
//! # Create
//! mutation { addPerson(name: "A", email: "a@x.com", age: 5) { id } }
//!
//! # Partial update
//! mutation { updatePerson(id: 1, age: 30) { name age } }
//! ```

pub mod mutation;
pub mod query;
pub mod schema;

use async_graphql::{EmptySubscription, Schema};

use crate::store::{StoreHandle, UpdateSemantics};
use mutation::Mutation;
use query::Query;

/// The Roster GraphQL schema type
pub type RosterSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the GraphQL schema over the given store.
pub fn build_schema(store: StoreHandle, semantics: UpdateSemantics) -> RosterSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .data(semantics)
        .finish()
}

/// Execute a GraphQL query and return JSON result
pub async fn execute(schema: &RosterSchema, query: &str) -> String {
    let result = schema.execute(query).await;
    serde_json::to_string_pretty(&result).unwrap_or_else(|_| "{}".to_string())
}

/// The schema in GraphQL SDL.
pub fn sdl(schema: &RosterSchema) -> String {
    schema.sdl()
}
