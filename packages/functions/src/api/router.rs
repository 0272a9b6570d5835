//! Static HTTP route table: routing key to operation plus per-route
//! invocation metadata.

use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::operation::{boxed, Operation, OperationError, RouteError};

/// One registered HTTP route: the operation and its invocation metadata.
pub struct RouteEntry {
    pub(crate) operation: Operation,
    /// Observability-only duration budget. Exceeding it logs a warning
    /// after the fact; it never aborts or alters the response.
    pub(crate) timeout: Option<Duration>,
    /// When set, the operation result is the response body itself rather
    /// than being nested under `{message, response}`.
    pub(crate) flatten_response: bool,
    /// Headers merged over the standard CORS set.
    pub(crate) extra_headers: BTreeMap<String, String>,
}

impl RouteEntry {
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, OperationError>> + Send + 'static,
    {
        Self {
            operation: boxed(operation),
            timeout: None,
            flatten_response: false,
            extra_headers: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, budget: Duration) -> Self {
        self.timeout = Some(budget);
        self
    }

    #[must_use]
    pub fn flattened(mut self) -> Self {
        self.flatten_response = true;
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.extra_headers
            .insert(name.to_string(), value.to_string());
        self
    }
}

/// Immutable routing table from routing key to [`RouteEntry`], built once
/// at process start.
#[derive(Default)]
pub struct ApiRouter {
    routes: HashMap<&'static str, RouteEntry>,
}

impl ApiRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route. Re-registering a key replaces the entry.
    pub fn register(&mut self, key: &'static str, entry: RouteEntry) {
        self.routes.insert(key, entry);
    }

    /// Resolves a routing key.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unrecognized`] for unknown keys; the manager's
    /// uniform error handling converts this to the 500 envelope.
    pub fn lookup(&self, key: &str) -> Result<&RouteEntry, RouteError> {
        self.routes.get(key).ok_or_else(|| RouteError::Unrecognized {
            key: key.to_string(),
        })
    }

    /// Registered routing keys, sorted for deterministic output.
    #[must_use]
    pub fn route_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.routes.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn noop_entry() -> RouteEntry {
        RouteEntry::new(|| async { Ok(json!({})) })
    }

    #[tokio::test]
    async fn lookup_finds_registered_route() {
        let mut router = ApiRouter::new();
        router.register("hello", noop_entry());

        let entry = router.lookup("hello").unwrap();
        assert_eq!((entry.operation)().await.unwrap(), json!({}));
    }

    #[test]
    fn lookup_rejects_unknown_key_at_lookup_time() {
        let router = ApiRouter::new();
        let err = router.lookup("nope").err().unwrap();
        assert!(matches!(err, RouteError::Unrecognized { key } if key == "nope"));
    }

    #[test]
    fn entry_builder_sets_metadata() {
        let entry = noop_entry()
            .with_timeout(Duration::from_secs(10))
            .flattened()
            .with_header("Cache-Control", "no-store");

        assert_eq!(entry.timeout, Some(Duration::from_secs(10)));
        assert!(entry.flatten_response);
        assert_eq!(entry.extra_headers["Cache-Control"], "no-store");
    }

    #[test]
    fn route_keys_are_sorted() {
        let mut router = ApiRouter::new();
        router.register("zeta", noop_entry());
        router.register("alpha", noop_entry());
        assert_eq!(router.route_keys(), vec!["alpha", "zeta"]);
    }
}
