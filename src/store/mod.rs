//! Record store for the people served by the GraphQL layer.
//!
//! A [`PersonStore`] is owned by a [`StoreHandle`], which is cloned into the
//! schema at construction. Each resolver runs one closure under the lock, so
//! a request observes and mutates the store atomically even when the HTTP
//! runtime handles requests on several threads.

pub mod memory;
pub mod patch;
pub mod person;

pub use memory::PersonStore;
pub use patch::{PersonPatch, UpdateSemantics};
pub use person::{seed_persons, Person, PersonId};

use std::sync::{Arc, RwLock};

use crate::error::{Result, RosterError};

/// Shared handle to a single [`PersonStore`].
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    inner: Arc<RwLock<PersonStore>>,
}

impl StoreHandle {
    pub fn new(store: PersonStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// A handle over a freshly seeded store.
    pub fn seeded() -> Self {
        Self::new(PersonStore::seeded())
    }

    /// Run `f` with shared access to the store.
    pub fn read<T>(&self, f: impl FnOnce(&PersonStore) -> T) -> Result<T> {
        let store = self.inner.read().map_err(|_| RosterError::LockPoisoned)?;
        Ok(f(&store))
    }

    /// Run `f` with exclusive access to the store.
    pub fn write<T>(&self, f: impl FnOnce(&mut PersonStore) -> T) -> Result<T> {
        let mut store = self.inner.write().map_err(|_| RosterError::LockPoisoned)?;
        Ok(f(&mut store))
    }

    /// Owned copy of every record, in store order.
    pub fn snapshot(&self) -> Result<Vec<Person>> {
        self.read(|s| s.all().to_vec())
    }
}
