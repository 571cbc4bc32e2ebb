//! Token triple granted by the OAuth2 code exchange.

use serde::Deserialize;
use std::fmt;

/// Tokens returned by RD Station after a successful code exchange.
///
/// Only [`AuthorizationService`](crate::services::AuthorizationService) builds
/// these, by deserializing the token endpoint's response.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorizationResponse {
    access_token: String,
    refresh_token: String,
    /// Lifetime of the access token in seconds
    expires_in: u64,
}

impl AuthorizationResponse {
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }
}

impl fmt::Debug for AuthorizationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationResponse")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
