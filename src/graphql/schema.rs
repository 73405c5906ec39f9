//! GraphQL object types.
//!
//! Every field is nullable on the wire, matching the published schema:
//!
//! ```graphql
//! type PersonType { id: Int, name: String, email: String, age: Int, friends: [PersonType] }
//! ```

use async_graphql::{Context, Object, Result};

use crate::store::{Person, StoreHandle};

/// A nullable list of nullable people, i.e. `[PersonType]`.
pub type PersonList = Option<Vec<Option<PersonNode>>>;

/// GraphQL view of a stored [`Person`].
pub struct PersonNode(pub Person);

impl From<Person> for PersonNode {
    fn from(person: Person) -> Self {
        PersonNode(person)
    }
}

/// Wrap records as a `[PersonType]` value.
pub fn person_list<I>(persons: I) -> PersonList
where
    I: IntoIterator<Item = Person>,
{
    Some(persons.into_iter().map(|p| Some(PersonNode(p))).collect())
}

#[Object(name = "PersonType")]
impl PersonNode {
    async fn id(&self) -> Option<i32> {
        Some(self.0.id)
    }

    async fn name(&self) -> Option<&str> {
        Some(&self.0.name)
    }

    async fn email(&self) -> Option<&str> {
        Some(&self.0.email)
    }

    async fn age(&self) -> Option<i32> {
        Some(self.0.age)
    }

    /// People listed as friends, in store order. Ids that no longer exist are
    /// skipped. Recomputed from the current store on every access.
    async fn friends(&self, ctx: &Context<'_>) -> Result<PersonList> {
        let store = ctx.data::<StoreHandle>()?;
        let friends = store.read(|s| {
            s.friends_of(&self.0)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })?;
        Ok(person_list(friends))
    }
}
