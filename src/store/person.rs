//! The person record.

use serde::{Deserialize, Serialize};

/// Identifier of a person. Matches the GraphQL `Int` scalar.
pub type PersonId = i32;

/// A single person in the roster.
///
/// `friends` holds ids of other people. The relation is one-sided and may
/// point at ids that no longer exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub age: i32,
    #[serde(default)]
    pub friends: Vec<PersonId>,
}

impl Person {
    pub fn new(
        id: PersonId,
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
        friends: Vec<PersonId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
            friends,
        }
    }

    /// Whether `other` appears in this person's friend list.
    pub fn is_friend(&self, other: PersonId) -> bool {
        self.friends.contains(&other)
    }
}

/// The records every fresh store starts with.
pub fn seed_persons() -> Vec<Person> {
    vec![
        Person::new(1, "Max", "max@gmail.com", 21, vec![3]),
        Person::new(2, "John", "john@gmail.com", 23, vec![1, 3]),
        Person::new(3, "Harry", "harry@gmail.com", 19, vec![1, 2]),
    ]
}
