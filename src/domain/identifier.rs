//! Contact identifier kinds.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The addressing mode declared for a contact.
///
/// A contact is addressed either by its email or by the UUID assigned to it by
/// RD Station. The declared kind decides which field must be present before
/// the contact can be serialized.
///
/// # Example
///
/// ```
/// use rdstation_client::domain::ContactIdentifier;
///
/// let kind: ContactIdentifier = "uuid".parse().unwrap();
/// assert_eq!(kind, ContactIdentifier::Uuid);
/// assert!(!ContactIdentifier::is_valid("phone"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactIdentifier {
    #[default]
    Email,
    Uuid,
}

impl ContactIdentifier {
    /// Every recognized kind, in declaration order.
    pub const ALL: [ContactIdentifier; 2] = [ContactIdentifier::Email, ContactIdentifier::Uuid];

    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Uuid => "uuid",
        }
    }

    /// Whether `kind` names a recognized identifier kind.
    pub fn is_valid(kind: &str) -> bool {
        Self::ALL.iter().any(|k| k.as_str() == kind)
    }

    /// Recognized kinds joined with commas, e.g. `email,uuid`.
    pub fn accepted() -> String {
        Self::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for ContactIdentifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidIdentifier {
                value: s.to_string(),
                accepted: Self::accepted(),
            })
    }
}

impl fmt::Display for ContactIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("email".parse::<ContactIdentifier>().unwrap(), ContactIdentifier::Email);
        assert_eq!("uuid".parse::<ContactIdentifier>().unwrap(), ContactIdentifier::Uuid);
    }

    #[test]
    fn test_parse_rejects_unknown_kinds() {
        for kind in ["", "phone", "EMAIL", "Uuid", "id"] {
            match kind.parse::<ContactIdentifier>() {
                Err(ValidationError::InvalidIdentifier { value, accepted }) => {
                    assert_eq!(value, kind);
                    assert_eq!(accepted, "email,uuid");
                }
                other => panic!("Expected InvalidIdentifier for {:?}, got {:?}", kind, other),
            }
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(ContactIdentifier::is_valid("email"));
        assert!(ContactIdentifier::is_valid("uuid"));
        assert!(!ContactIdentifier::is_valid("name"));
    }

    #[test]
    fn test_default_is_email() {
        assert_eq!(ContactIdentifier::default(), ContactIdentifier::Email);
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&ContactIdentifier::Uuid).unwrap();
        assert_eq!(json, "\"uuid\"");
        let kind: ContactIdentifier = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(kind, ContactIdentifier::Email);
    }
}
