//! Named API routes and their resolution to absolute URLs.

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use std::sync::Arc;

/// OAuth2 token endpoint.
pub const AUTHORIZATION: &str = "authorization";

/// Contacts collection.
pub const CONTACTS: &str = "contacts";

const ROUTES: &[(&str, &str)] = &[(AUTHORIZATION, "/auth/token"), (CONTACTS, "/platform/contacts")];

/// Translates a symbolic route name into an absolute URL.
pub trait RouteResolver: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRoute` when `route` is not registered.
    fn resolve(&self, route: &str) -> ApiResult<String>;
}

impl<T: RouteResolver + ?Sized> RouteResolver for Arc<T> {
    fn resolve(&self, route: &str) -> ApiResult<String> {
        (**self).resolve(route)
    }
}

/// Static route table rooted at an API base URL.
///
/// # Example
///
/// ```
/// use rdstation_client::routes::{RouteResolver, RouteTable, AUTHORIZATION};
///
/// let routes = RouteTable::new("https://api.rd.services/");
/// assert_eq!(
///     routes.resolve(AUTHORIZATION).unwrap(),
///     "https://api.rd.services/auth/token"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable {
    base_url: String,
}

impl RouteTable {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone())
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

impl RouteResolver for RouteTable {
    fn resolve(&self, route: &str) -> ApiResult<String> {
        ROUTES
            .iter()
            .find(|(name, _)| *name == route)
            .map(|(_, path)| self.build_url(path))
            .ok_or_else(|| ApiError::InvalidRoute(route.to_string()))
    }
}
