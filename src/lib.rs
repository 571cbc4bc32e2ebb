//! RD Station Client - a Rust SDK for the RD Station marketing-automation API.
//!
//! The crate covers the OAuth2 authorization-code exchange and the
//! construction of validated contact records ready to be submitted.
//!
//! # Architecture
//!
//! - **domain**: Identifier kinds, field validation rules and their errors
//! - **models**: The `Contact` builder and the `AuthorizationResponse` token triple
//! - **services**: The code-exchange service and its async facade
//! - **client**: The `HttpTransport` seam and its `ureq` implementation
//! - **routes**: Named endpoints resolved against the API base URL
//! - **config**: Configuration management from environment variables
//! - **error**: Errors for remote calls and configuration
//! - **metrics**: Request counters kept by the transport

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod services;

pub use client::{HttpTransport, UreqTransport};
pub use config::Config;
pub use domain::{ContactIdentifier, ValidationError};
pub use error::{ApiError, ApiResult, ConfigError};
pub use metrics::Metrics;
pub use models::{AuthorizationResponse, Contact, WireRecord};
pub use routes::{RouteResolver, RouteTable};
pub use services::{AsyncAuthorization, AsyncAuthorizationService, AuthorizationService};
