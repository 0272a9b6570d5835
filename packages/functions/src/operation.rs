//! Operation type and the dispatch error taxonomy.
//!
//! Operations are zero-argument async callables returning a
//! JSON-serializable value. Anything they need (the secret cache, for
//! instance) is captured at registration time, not threaded through the
//! request — route-configured parameters only.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::secrets::SecretError;

/// Future produced by invoking an operation.
pub type OperationFuture = Pin<Box<dyn Future<Output = Result<Value, OperationError>> + Send>>;

/// A registered zero-argument operation.
pub type Operation = Arc<dyn Fn() -> OperationFuture + Send + Sync>;

/// Type-erases an async closure into an [`Operation`].
pub fn boxed<F, Fut>(operation: F) -> Operation
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, OperationError>> + Send + 'static,
{
    Arc::new(move || Box::pin(operation()))
}

/// Routing-key lookup failure, surfaced at lookup time rather than via an
/// error-raising placeholder operation.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("unrecognized route: {key}")]
    Unrecognized { key: String },
}

/// Failure raised by a registered operation.
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error("secret resolution failed: {0}")]
    Secret(#[from] SecretError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Any failure between lookup and envelope construction. Caught exactly
/// once at the manager boundary and converted to a 500 envelope; never
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Operation(#[from] OperationError),
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn boxed_operation_is_reinvocable() {
        let op = boxed(|| async { Ok(json!({ "ok": true })) });
        assert_eq!(op().await.unwrap()["ok"], true);
        assert_eq!(op().await.unwrap()["ok"], true);
    }

    #[test]
    fn route_error_names_the_key() {
        let err = RouteError::Unrecognized {
            key: "unknown".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized route: unknown");
    }

    #[test]
    fn dispatch_error_is_transparent_over_operation_failures() {
        let err = DispatchError::Operation(OperationError::Internal(anyhow::anyhow!("boom")));
        assert_eq!(err.to_string(), "boom");
    }
}
