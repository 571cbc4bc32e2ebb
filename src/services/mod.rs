//! Application service layer.
//!
//! Services orchestrate calls against the RD Station API through the
//! injected transport and route resolver.

mod async_wrapper;
mod authorization;

pub use async_wrapper::{AsyncAuthorization, AsyncAuthorizationService};
pub use authorization::AuthorizationService;
