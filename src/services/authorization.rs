//! OAuth2 authorization-code exchange.

use crate::client::{HttpTransport, UreqTransport};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{AuthorizationResponse, WireRecord};
use crate::routes::{self, RouteResolver, RouteTable};
use serde_json::Value;
use std::fmt;

/// Exchanges a one-time authorization code for an access/refresh token pair.
///
/// The credentials are opaque here; the token endpoint is the one that judges
/// them. Nothing is cached, so every call performs a fresh exchange.
pub struct AuthorizationService<T, R> {
    client_id: String,
    client_secret: String,
    code: String,
    transport: T,
    routes: R,
}

impl AuthorizationService<UreqTransport, RouteTable> {
    /// Build a service for `code` using the configured credentials, the
    /// default `ureq` transport and the static route table.
    pub fn from_config(config: &Config, code: impl Into<String>) -> Self {
        Self::new(
            config.client_id.clone(),
            config.client_secret.clone(),
            code,
            UreqTransport::from_config(config),
            RouteTable::from_config(config),
        )
    }
}

impl<T, R> AuthorizationService<T, R>
where
    T: HttpTransport,
    R: RouteResolver,
{
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        code: impl Into<String>,
        transport: T,
        routes: R,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            code: code.into(),
            transport,
            routes,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exchange the authorization code for tokens.
    ///
    /// # Errors
    ///
    /// - `ApiError::InvalidRoute` if the token endpoint is not registered;
    ///   the transport is not called in that case
    /// - `ApiError::RequestFailed` / `ApiError::Status` from the transport
    /// - `ApiError::ContentTypeInvalid` if the body is not a token triple
    pub fn get_access_token(&self) -> ApiResult<AuthorizationResponse> {
        let url = self.routes.resolve(routes::AUTHORIZATION)?;

        tracing::info!("Exchanging authorization code for client {}", self.client_id);

        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", self.code.as_str()),
        ];
        let body = self.transport.post(&url, &form)?;
        let response = Self::parse_response(body)?;

        tracing::info!(
            "Authorization succeeded; access token expires in {}s",
            response.expires_in()
        );
        Ok(response)
    }

    fn parse_response(body: WireRecord) -> ApiResult<AuthorizationResponse> {
        serde_json::from_value(Value::Object(body)).map_err(|e| {
            ApiError::ContentTypeInvalid(format!("unexpected token response: {}", e))
        })
    }
}

impl<T, R> fmt::Debug for AuthorizationService<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationService")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("code", &"<redacted>")
            .finish_non_exhaustive()
    }
}
