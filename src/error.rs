//! Error types for hello-card.

use thiserror::Error;

/// Result type alias using hello-card's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// A card configuration that violates a required invariant.
///
/// Raised once, when a card or harness is constructed, and handed back to
/// whoever supplied the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Card id is empty.
    #[error("card id cannot be empty")]
    EmptyId,

    /// Card id contains a character outside `[a-z0-9_-]`.
    #[error("invalid character {1:?} in card id {0:?}")]
    InvalidIdCharacter(String, char),

    /// Card title is missing or blank.
    #[error("card {0:?} has an empty title")]
    EmptyTitle(String),

    /// Two cards in one harness share an id.
    #[error("duplicate card id: {0}")]
    DuplicateId(String),

    /// No card with the given id exists in the harness.
    #[error("unknown card: {0}")]
    UnknownCard(String),
}

/// Errors that can occur in hello-card.
#[derive(Error, Debug)]
pub enum Error {
    /// Could not locate a configuration directory.
    #[error("no config found: {0}")]
    NoConfigFound(String),

    /// Failed to read or write configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid card configuration.
    #[error(transparent)]
    Card(#[from] ConfigError),

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    /// JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
