//! Domain rules for contact records.
//!
//! This module holds the identifier policy, the field validation rules and
//! the errors they raise. Contacts in `models` call into it whenever a
//! validated field is assigned.

pub mod errors;
pub mod identifier;
pub mod validation;

pub use errors::ValidationError;
pub use identifier::ContactIdentifier;
pub use validation::{validate_email, validate_url};
