//! Static event table: event name to zero-argument operation.
//!
//! Event routes carry no metadata beyond the operation itself — no
//! timeout budget, no response-shape flags, no extra headers.

use std::collections::HashMap;
use std::future::Future;

use serde_json::Value;

use crate::operation::{boxed, Operation, OperationError, RouteError};

/// Immutable table from event name to operation, built once at process
/// start.
#[derive(Default)]
pub struct EventRouter {
    routes: HashMap<&'static str, Operation>,
}

impl EventRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an event handler. Re-registering a name replaces it.
    pub fn register<F, Fut>(&mut self, name: &'static str, operation: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, OperationError>> + Send + 'static,
    {
        self.routes.insert(name, boxed(operation));
    }

    /// Resolves an event name.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unrecognized`] for unknown names.
    pub fn lookup(&self, name: &str) -> Result<&Operation, RouteError> {
        self.routes.get(name).ok_or_else(|| RouteError::Unrecognized {
            key: name.to_string(),
        })
    }

    /// Registered event names, sorted for deterministic output.
    #[must_use]
    pub fn event_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.routes.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn lookup_finds_registered_event() {
        let mut router = EventRouter::new();
        router.register("DataSync", || async { Ok(json!({ "status": "success" })) });

        let operation = router.lookup("DataSync").unwrap();
        assert_eq!(operation().await.unwrap()["status"], "success");
    }

    #[test]
    fn lookup_rejects_unknown_event() {
        let router = EventRouter::new();
        let err = router.lookup("Nope").err().unwrap();
        assert!(matches!(err, RouteError::Unrecognized { key } if key == "Nope"));
    }
}
