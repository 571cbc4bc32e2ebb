//! Error types for the RD Station client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Contact validation errors live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can occur when talking to the RD Station API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a usable response (network, TLS, I/O).
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The API answered with a non-success status code
    #[error("Request failed (status {status}): {message}")]
    Status { status: u16, message: String },

    /// The response body is not the structured JSON object we expected
    #[error("Content type invalid: {0}")]
    ContentTypeInvalid(String),

    /// The route name is not registered with the resolver
    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}

impl ApiError {
    /// Whether this error is one of the "request failed" kinds.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Self::RequestFailed(_) | Self::Status { .. })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
