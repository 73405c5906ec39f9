//! Error types for Roster.

use thiserror::Error;

/// Errors raised by the store, configuration, and server layers.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid listen address: {0}")]
    InvalidAddress(String),

    /// Every `Int` id has been handed out.
    #[error("no person ids left")]
    IdsExhausted,

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, RosterError>;
