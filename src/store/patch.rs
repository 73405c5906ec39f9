//! Partial updates for `updatePerson`.
//!
//! Two ways of reading an optional argument are supported:
//!
//! - [`UpdateSemantics::Presence`]: any provided value wins, including `0`
//!   and the empty string. This is the default.
//! - [`UpdateSemantics::Truthy`]: legacy behavior. Empty strings and `0` are
//!   treated as "not provided" and the current value is kept.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::person::Person;

/// How `updatePerson` decides whether an optional argument was supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateSemantics {
    #[default]
    Presence,
    Truthy,
}

impl fmt::Display for UpdateSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateSemantics::Presence => write!(f, "presence"),
            UpdateSemantics::Truthy => write!(f, "truthy"),
        }
    }
}

impl FromStr for UpdateSemantics {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "presence" => Ok(UpdateSemantics::Presence),
            "truthy" => Ok(UpdateSemantics::Truthy),
            other => Err(format!(
                "unknown update semantics '{}' (expected 'presence' or 'truthy')",
                other
            )),
        }
    }
}

/// Optional replacement values for a person's mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl PersonPatch {
    /// Build the replacement record for `current`.
    ///
    /// `id` and `friends` always come from `current`.
    pub fn apply(self, current: &Person, semantics: UpdateSemantics) -> Person {
        let (name, email, age) = match semantics {
            UpdateSemantics::Presence => (self.name, self.email, self.age),
            UpdateSemantics::Truthy => (
                self.name.filter(|s| !s.is_empty()),
                self.email.filter(|s| !s.is_empty()),
                self.age.filter(|&a| a != 0),
            ),
        };

        Person {
            id: current.id,
            name: name.unwrap_or_else(|| current.name.clone()),
            email: email.unwrap_or_else(|| current.email.clone()),
            age: age.unwrap_or(current.age),
            friends: current.friends.clone(),
        }
    }
}
