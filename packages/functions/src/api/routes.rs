//! Static HTTP route table, compiled in at startup.
//!
//! Register new APIs here.

use std::sync::Arc;
use std::time::Duration;

use crate::api::router::{ApiRouter, RouteEntry};
use crate::ops;
use crate::secrets::Secrets;

/// Builds the HTTP routing table. Operations capture the secret cache at
/// registration; nothing is imported at dispatch time.
#[must_use]
pub fn build(secrets: &Arc<Secrets>) -> ApiRouter {
    let mut router = ApiRouter::new();

    let s = Arc::clone(secrets);
    router.register(
        "hello",
        RouteEntry::new(move || ops::health::say_hello(Arc::clone(&s)))
            .with_timeout(Duration::from_secs(10)),
    );

    let s = Arc::clone(secrets);
    router.register(
        "health",
        RouteEntry::new(move || ops::health::check_health(Arc::clone(&s)))
            .with_timeout(Duration::from_secs(5)),
    );

    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecretsConfig;
    use crate::secrets::testing::StaticStore;

    #[test]
    fn registers_the_known_routes() {
        let secrets = Arc::new(Secrets::new(
            Arc::new(StaticStore::default()),
            &SecretsConfig::default(),
        ));
        let router = build(&secrets);
        assert_eq!(router.route_keys(), vec!["health", "hello"]);
    }
}
