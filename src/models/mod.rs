//! Data models exchanged with the RD Station API.

pub mod authorization;
pub mod contact;

pub use authorization::AuthorizationResponse;
pub use contact::{Contact, WireRecord};
