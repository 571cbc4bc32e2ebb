//! HTTP transport for the RD Station API.
//!
//! Services talk to the network through the [`HttpTransport`] trait so they can
//! be exercised against stubs. [`UreqTransport`] is the production
//! implementation: a blocking `ureq` agent that sends form-encoded bodies and
//! expects JSON objects back.

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::metrics::Metrics;
use crate::models::WireRecord;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Minimal HTTP surface the services need.
pub trait HttpTransport: Send + Sync {
    /// POST `form` as `application/x-www-form-urlencoded` to `url` and return
    /// the decoded JSON object.
    ///
    /// # Errors
    ///
    /// - `ApiError::RequestFailed` when no response was received
    /// - `ApiError::Status` for non-success status codes
    /// - `ApiError::ContentTypeInvalid` when the body is not a JSON object
    fn post(&self, url: &str, form: &[(&str, &str)]) -> ApiResult<WireRecord>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    fn post(&self, url: &str, form: &[(&str, &str)]) -> ApiResult<WireRecord> {
        (**self).post(url, form)
    }
}

/// Blocking transport backed by a shared `ureq` agent.
///
/// Can be called from async contexts via `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct UreqTransport {
    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl UreqTransport {
    /// Create a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a transport using the configured request timeout.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Duration::from_secs(config.request_timeout))
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Map a ureq error to an ApiError.
    fn map_error(error: ureq::Error) -> ApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                ApiError::Status { status, message }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ApiError::RequestFailed("Connection failed".to_string())
                } else {
                    ApiError::RequestFailed(transport.to_string())
                }
            }
        }
    }

    /// Decode a response body into a JSON object.
    fn parse_body(body: &str) -> ApiResult<WireRecord> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ApiError::ContentTypeInvalid(format!("response is not JSON: {}", e)))?;

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(ApiError::ContentTypeInvalid(
                "expected a JSON object in the response body".to_string(),
            )),
        }
    }
}

impl HttpTransport for UreqTransport {
    fn post(&self, url: &str, form: &[(&str, &str)]) -> ApiResult<WireRecord> {
        let timer = self.metrics.start_request();

        tracing::debug!(
            "POST {} (fields: {:?})",
            url,
            form.iter().map(|(k, _)| *k).collect::<Vec<_>>()
        );

        let response = match self.agent.post(url).send_form(form) {
            Ok(response) => response,
            Err(e) => {
                let err = Self::map_error(e);
                tracing::error!("POST {} - Error: {}", url, err);
                timer.finish(false);
                return Err(err);
            }
        };

        tracing::debug!("POST {} - Success (status: {})", url, response.status());

        let body = match response.into_string() {
            Ok(body) => body,
            Err(e) => {
                timer.finish(false);
                return Err(ApiError::RequestFailed(e.to_string()));
            }
        };
        timer.finish(true);

        Self::parse_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_accepts_objects() {
        let map = UreqTransport::parse_body(r#"{"access_token": "AT"}"#).unwrap();
        assert_eq!(map["access_token"], "AT");
    }

    #[test]
    fn test_parse_body_rejects_non_json() {
        match UreqTransport::parse_body("<html>oops</html>") {
            Err(ApiError::ContentTypeInvalid(msg)) => assert!(msg.contains("not JSON")),
            other => panic!("Expected ContentTypeInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_body_rejects_non_objects() {
        assert!(matches!(
            UreqTransport::parse_body("[1, 2, 3]"),
            Err(ApiError::ContentTypeInvalid(_))
        ));
        assert!(matches!(
            UreqTransport::parse_body("\"token\""),
            Err(ApiError::ContentTypeInvalid(_))
        ));
    }

    #[test]
    fn test_from_config_starts_with_empty_metrics() {
        let transport = UreqTransport::from_config(&Config::default());
        assert_eq!(transport.metrics().http_requests_total(), 0);
    }
}
