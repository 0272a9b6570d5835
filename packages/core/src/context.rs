//! Per-invocation context: request id and wall-clock start time.
//!
//! One context is created at each entry point and passed down to the
//! manager. It is read-only after construction and discarded with the
//! response, so concurrent invocations in the same process never share
//! tagging state.

use std::time::{Duration, Instant};

/// Request-scoped invocation metadata.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Unique id for this invocation (Lambda request id, or a generated
    /// UUID for local runs).
    pub request_id: String,
    started: Instant,
}

impl InvocationContext {
    /// Creates a context for the given request id, starting the clock now.
    #[must_use]
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            started: Instant::now(),
        }
    }

    /// Creates a context with a freshly generated request id.
    ///
    /// Used by the local invocation tool, where no hosting environment
    /// supplies one.
    #[must_use]
    pub fn generated() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    /// Wall-clock time elapsed since the context was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
