use rdstation_client::{ApiError, ApiResult, HttpTransport, WireRecord};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A POST observed by [`MockTransport`].
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPost {
    pub url: String,
    pub form: Vec<(String, String)>,
}

#[allow(dead_code)]
impl RecordedPost {
    /// Look up a form field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Mock transport for testing.
///
/// Replays queued responses in order and records every request so tests can
/// assert on what would have gone over the wire.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<ApiResult<WireRecord>>>,
    posts: Mutex<Vec<RecordedPost>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON body; non-object values behave like an unparseable body.
    pub fn respond_with(self, body: Value) -> Self {
        let response = match body {
            Value::Object(map) => Ok(map),
            other => Err(ApiError::ContentTypeInvalid(format!(
                "expected a JSON object, got {}",
                other
            ))),
        };
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Queue a failure.
    pub fn fail_with(self, error: ApiError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// All requests seen so far.
    pub fn posts(&self) -> Vec<RecordedPost> {
        self.posts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

impl HttpTransport for MockTransport {
    fn post(&self, url: &str, form: &[(&str, &str)]) -> ApiResult<WireRecord> {
        self.posts.lock().unwrap().push(RecordedPost {
            url: url.to_string(),
            form: form
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::RequestFailed("no response queued".to_string())))
    }
}
