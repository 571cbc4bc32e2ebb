//! Configuration management for the RD Station client.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default RD Station API base URL.
pub const DEFAULT_API_URL: &str = "https://api.rd.services";

/// Configuration for the RD Station client.
#[derive(Clone)]
pub struct Config {
    /// RD Station API base URL
    pub api_url: String,

    /// OAuth2 client identifier
    pub client_id: String,

    /// OAuth2 client secret
    pub client_secret: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `RDSTATION_CLIENT_ID`: OAuth2 client id
    /// - `RDSTATION_CLIENT_SECRET`: OAuth2 client secret
    ///
    /// Optional environment variables:
    /// - `RDSTATION_API_BASE_URL`: API base URL (default: https://api.rd.services)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let api_url =
            env::var("RDSTATION_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RDSTATION_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let client_id = Self::required_var("RDSTATION_CLIENT_ID")?;
        let client_secret = Self::required_var("RDSTATION_CLIENT_SECRET")?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_url,
            client_id,
            client_secret,
            request_timeout,
            log_level,
        })
    }

    /// Read a variable that must be present and non-blank.
    fn required_var(var_name: &str) -> ConfigResult<String> {
        let value =
            env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))?;

        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(value)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("log_level", &self.log_level)
            .finish()
    }
}
