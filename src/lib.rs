//! # Roster
//!
//! A GraphQL API over an in-memory roster of people.
//!
//! Roster keeps an ordered list of people in process memory and exposes
//! create, read, update, and delete operations through a GraphQL schema
//! served over HTTP.
//!
//! ## Key Features
//!
//! - **Lazy friends**: `friends` is resolved against the live store on access
//! - **Owned store**: each schema gets its own [`StoreHandle`], so tests stay isolated
//! - **Stable ids**: ids come from a monotonic counter and are never reused
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roster::{build_schema, execute, StoreHandle, UpdateSemantics};
//!
//! # async fn demo() {
//! let schema = build_schema(StoreHandle::seeded(), UpdateSemantics::Presence);
//! let json = execute(&schema, "{ person(id: 2) { name friends { name } } }").await;
//! // {"data": {"person": {"name": "John", "friends": [...]}}}
//! # }
//! ```

pub mod config;
pub mod error;
pub mod graphql;
pub mod server;
pub mod store;

// Re-exports for convenience
pub use config::{ConfigOverrides, ServerConfig};
pub use error::{Result, RosterError};
pub use graphql::{build_schema, execute, sdl, RosterSchema};
pub use server::{build_router, HttpServer};
pub use store::{
    seed_persons, Person, PersonId, PersonPatch, PersonStore, StoreHandle, UpdateSemantics,
};
