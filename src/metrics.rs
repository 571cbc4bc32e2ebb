//! Request counters for the HTTP transport.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    failures: AtomicU64,
    elapsed_ms: AtomicU64,
}

/// Counters shared by every clone of a transport.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing one request. Nothing is counted until the timer finishes.
    pub fn start_request(&self) -> RequestTimer {
        RequestTimer {
            started: Instant::now(),
            counters: Arc::clone(&self.counters),
        }
    }

    pub fn http_requests_total(&self) -> u64 {
        self.counters.requests.load(Ordering::Relaxed)
    }

    /// Requests that ended in a transport error or a non-success status.
    pub fn http_errors_total(&self) -> u64 {
        self.counters.failures.load(Ordering::Relaxed)
    }

    /// Mean request time in milliseconds, `0` before the first request.
    pub fn http_duration_avg_ms(&self) -> u64 {
        let requests = self.http_requests_total();
        if requests == 0 {
            return 0;
        }
        self.counters.elapsed_ms.load(Ordering::Relaxed) / requests
    }
}

/// An in-flight request. Consumed by [`RequestTimer::finish`].
#[must_use = "a request is only counted once the timer is finished"]
pub struct RequestTimer {
    started: Instant,
    counters: Arc<Counters>,
}

impl RequestTimer {
    /// Count the request, and count it as failed unless `succeeded`.
    pub fn finish(self, succeeded: bool) {
        let elapsed = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.counters.requests.fetch_add(1, Ordering::Relaxed);
        self.counters.elapsed_ms.fetch_add(elapsed, Ordering::Relaxed);
        if !succeeded {
            self.counters.failures.fetch_add(1, Ordering::Relaxed);
        }
    }
}
