//! Domain validation errors.

use std::fmt;

/// Errors raised while building or serializing a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The identifier kind is not one of the recognized kinds.
    InvalidIdentifier {
        /// The rejected value.
        value: String,
        /// Comma-joined list of accepted kinds.
        accepted: String,
    },

    /// The provided email address is malformed.
    InvalidEmail(String),

    /// The provided website is not an absolute URL.
    InvalidUrl(String),

    /// The field backing the declared identifier kind is unset or empty.
    EmptyIdentifier,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier { accepted, .. } => write!(
                f,
                "Sent identifier value is not valid. The valid values are: {}",
                accepted
            ),
            Self::InvalidEmail(email) => write!(f, "Not a valid email: {}", email),
            Self::InvalidUrl(url) => write!(f, "Not a valid website: {}", url),
            Self::EmptyIdentifier => write!(f, "The identifier value is empty."),
        }
    }
}

impl std::error::Error for ValidationError {}
