//! Async facade over the blocking authorization service.
//!
//! The token exchange runs on `tokio::task::spawn_blocking` so async callers
//! do not stall their runtime while `ureq` waits on the network.

use super::authorization::AuthorizationService;
use crate::client::HttpTransport;
use crate::error::{ApiError, ApiResult};
use crate::models::AuthorizationResponse;
use crate::routes::RouteResolver;
use async_trait::async_trait;
use std::sync::Arc;

/// Async variant of the code exchange.
#[async_trait]
pub trait AsyncAuthorization: Send + Sync {
    async fn get_access_token(&self) -> ApiResult<AuthorizationResponse>;
}

/// Runs an [`AuthorizationService`] on tokio's blocking thread pool.
pub struct AsyncAuthorizationService<T, R> {
    inner: Arc<AuthorizationService<T, R>>,
}

impl<T, R> AsyncAuthorizationService<T, R> {
    pub fn new(service: AuthorizationService<T, R>) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }
}

impl<T, R> Clone for AsyncAuthorizationService<T, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl<T, R> AsyncAuthorization for AsyncAuthorizationService<T, R>
where
    T: HttpTransport + 'static,
    R: RouteResolver + 'static,
{
    async fn get_access_token(&self) -> ApiResult<AuthorizationResponse> {
        let service = Arc::clone(&self.inner);

        tokio::task::spawn_blocking(move || service.get_access_token())
            .await
            .map_err(|e| ApiError::RequestFailed(format!("Task join error: {}", e)))?
    }
}
