//! Card identifier validation and type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A validated card identifier.
///
/// Card ids must be:
/// - non-empty
/// - lowercase ASCII letters, digits, hyphens or underscores
///
/// Uniqueness is not a property of a single id; the harness checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(String);

impl CardId {
    /// Create a new card id, validating the input.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyId`] or [`ConfigError::InvalidIdCharacter`].
    pub fn new(id: &str) -> Result<Self, ConfigError> {
        Self::validate(id)?;
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> Result<(), ConfigError> {
        if id.is_empty() {
            return Err(ConfigError::EmptyId);
        }

        for c in id.chars() {
            if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_') {
                return Err(ConfigError::InvalidIdCharacter(id.to_string(), c));
            }
        }

        Ok(())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CardId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CardId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<&str> for CardId {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for CardId {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_card_ids() {
        assert!(CardId::new("a").is_ok());
        assert!(CardId::new("hello-world").is_ok());
        assert!(CardId::new("card_1").is_ok());
        assert!(CardId::new("42").is_ok());
    }

    #[test]
    fn rejects_uppercase() {
        assert_eq!(
            CardId::new("Alpha"),
            Err(ConfigError::InvalidIdCharacter("Alpha".to_string(), 'A'))
        );
        assert!(CardId::new("alpha").is_ok());
    }

    #[test]
    fn rejects_empty_id() {
        assert_eq!(CardId::new(""), Err(ConfigError::EmptyId));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(
            CardId::new("my card"),
            Err(ConfigError::InvalidIdCharacter("my card".to_string(), ' '))
        );
        assert!(matches!(
            CardId::new("card.1"),
            Err(ConfigError::InvalidIdCharacter(_, '.'))
        ));
    }

    #[test]
    fn compares_with_str() {
        let id = CardId::new("alpha").unwrap();
        assert_eq!(id, "alpha");
        assert_ne!(id, "beta");
    }

    #[test]
    fn deserializes_through_validation() {
        let id: CardId = serde_json::from_str("\"ok-id\"").expect("valid id");
        assert_eq!(id.as_str(), "ok-id");

        let bad: Result<CardId, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }

    #[test]
    fn try_from_string() {
        let id: Result<CardId, _> = String::from("valid_id").try_into();
        assert!(id.is_ok());
    }
}
