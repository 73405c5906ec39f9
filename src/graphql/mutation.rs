//! GraphQL Mutation resolvers.
//!
//! Each mutation is a single read-modify-write under the store's write lock.

use async_graphql::{Context, Object, Result};
use tracing::{debug, info};

use super::schema::{person_list, PersonList, PersonNode};
use crate::store::{PersonPatch, StoreHandle, UpdateSemantics};

/// Root mutation type
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a person with the next free id and no friends.
    ///
    /// Returns the record as stored.
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        age: i32,
    ) -> Result<Option<PersonNode>> {
        let store = ctx.data::<StoreHandle>()?;
        let created = store.write(|s| s.create(name, email, age).cloned())??;
        info!(id = created.id, "person added");
        Ok(Some(PersonNode(created)))
    }

    /// Remove the person with this id and return everyone left.
    ///
    /// Deleting an unknown id leaves the store unchanged. Friend lists that
    /// reference the id are not touched.
    async fn delete_person(&self, ctx: &Context<'_>, id: i32) -> Result<PersonList> {
        let store = ctx.data::<StoreHandle>()?;
        let (removed, remaining) = store.write(|s| {
            let removed = s.remove_where(|p| p.id == id);
            (removed, s.all().to_vec())
        })?;
        info!(id, removed, remaining = remaining.len(), "person deleted");
        Ok(person_list(remaining))
    }

    /// Replace the given fields of an existing person.
    ///
    /// Omitted fields keep their current value; `friends` is always kept.
    /// Returns null when nobody has that id.
    async fn update_person(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: Option<String>,
        email: Option<String>,
        age: Option<i32>,
    ) -> Result<Option<PersonNode>> {
        let store = ctx.data::<StoreHandle>()?;
        let semantics = ctx
            .data_opt::<UpdateSemantics>()
            .copied()
            .unwrap_or_default();
        let patch = PersonPatch { name, email, age };

        let updated = store.write(|s| {
            let index = s.position_of(id)?;
            let replacement = patch.apply(&s.all()[index], semantics);
            s.replace_at(index, replacement).cloned()
        })?;

        match &updated {
            Some(person) => info!(id = person.id, %semantics, "person updated"),
            None => debug!(id, "update skipped, no such person"),
        }
        Ok(updated.map(PersonNode))
    }
}
