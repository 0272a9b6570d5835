//! Waypost Core — request/response envelopes and invocation context.
//!
//! Pure types shared by both trigger pipelines (HTTP API and scheduled
//! events). No I/O lives here; the runtime crate owns routing, secret
//! resolution, and the Lambda entry points.

pub mod context;
pub mod envelope;

pub use context::InvocationContext;
pub use envelope::{
    cors_headers, ApiRequest, ApiResponse, EventRequest, EventResponse, ResponseBody,
};

#[cfg(test)]
mod tests {
    #[test]
    fn crate_loads() {
        // Empty body: if this test runs, the crate compiles and loads.
    }
}
