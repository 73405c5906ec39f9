//! In-memory person store.
//!
//! An ordered `Vec<Person>` plus a monotonically increasing id counter.
//! Insertion order is the only ordering; every lookup is a linear scan.

use super::person::{seed_persons, Person, PersonId};
use crate::error::{Result, RosterError};

/// The authoritative collection of people.
#[derive(Debug, Clone)]
pub struct PersonStore {
    persons: Vec<Person>,
    /// Next id handed out by [`PersonStore::create`]. Never decreases, so
    /// ids of deleted people are not reused. Wider than `PersonId` so that a
    /// record with id `i32::MAX` exhausts the counter instead of overflowing.
    next_id: i64,
}

impl PersonStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            persons: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the three seed records.
    pub fn seeded() -> Self {
        Self::from_persons(seed_persons())
    }

    /// Create a store from existing records, keeping their order.
    pub fn from_persons(persons: Vec<Person>) -> Self {
        let next_id = persons.iter().map(|p| i64::from(p.id)).max().unwrap_or(0) + 1;
        Self { persons, next_id }
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// The id the next created person will get, or `None` once every id
    /// has been handed out.
    pub fn next_id(&self) -> Option<PersonId> {
        PersonId::try_from(self.next_id).ok()
    }

    /// First person with the given id.
    pub fn find_by_id(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    /// Index of the first person with the given id.
    pub fn position_of(&self, id: PersonId) -> Option<usize> {
        self.persons.iter().position(|p| p.id == id)
    }

    /// The full collection in insertion order.
    pub fn all(&self) -> &[Person] {
        &self.persons
    }

    /// Add a person to the end of the collection.
    pub fn append(&mut self, person: Person) -> &Person {
        self.next_id = self.next_id.max(i64::from(person.id) + 1);
        self.persons.push(person);
        &self.persons[self.persons.len() - 1]
    }

    /// Allocate an id and append a new person with no friends.
    ///
    /// Returns the record as stored, or [`RosterError::IdsExhausted`] when no
    /// id is left.
    pub fn create(&mut self, name: String, email: String, age: i32) -> Result<&Person> {
        let id = self.next_id().ok_or(RosterError::IdsExhausted)?;
        Ok(self.append(Person {
            id,
            name,
            email,
            age,
            friends: Vec::new(),
        }))
    }

    /// Overwrite the record at `index`, keeping its position.
    ///
    /// Returns `None` (and changes nothing) if `index` is out of range.
    pub fn replace_at(&mut self, index: usize, person: Person) -> Option<&Person> {
        let slot = self.persons.get_mut(index)?;
        *slot = person;
        Some(&*slot)
    }

    /// Drop every person matching `predicate`. Returns how many were removed.
    ///
    /// The collection is rebuilt from the survivors rather than filtered in
    /// place.
    pub fn remove_where<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&Person) -> bool,
    {
        let before = self.persons.len();
        self.persons = std::mem::take(&mut self.persons)
            .into_iter()
            .filter(|p| !predicate(p))
            .collect();
        before - self.persons.len()
    }

    /// Every stored person listed in `person.friends`, in store order.
    ///
    /// Ids with no matching record are skipped.
    pub fn friends_of(&self, person: &Person) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|candidate| person.is_friend(candidate.id))
            .collect()
    }
}

impl Default for PersonStore {
    fn default() -> Self {
        Self::new()
    }
}
