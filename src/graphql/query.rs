//! GraphQL Query resolvers.
//!
//! Read operations over the person store.

use async_graphql::{Context, Object, Result};
use tracing::debug;

use super::schema::{person_list, PersonList, PersonNode};
use crate::store::StoreHandle;

/// Root query type
pub struct Query;

#[Object]
impl Query {
    /// Look up one person by id.
    ///
    /// Returns null when nobody has that id, or when no id is given.
    async fn person(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<PersonNode>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = ctx.data::<StoreHandle>()?;
        let found = store.read(|s| s.find_by_id(id).cloned())?;
        debug!(id, found = found.is_some(), "person lookup");
        Ok(found.map(PersonNode))
    }

    /// Every person, in insertion order.
    async fn all_persons(&self, ctx: &Context<'_>) -> Result<PersonList> {
        let store = ctx.data::<StoreHandle>()?;
        Ok(person_list(store.snapshot()?))
    }
}
