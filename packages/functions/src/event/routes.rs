//! Static event table, compiled in at startup.
//!
//! Register new event handlers here.

use std::sync::Arc;

use crate::event::router::EventRouter;
use crate::ops;
use crate::secrets::Secrets;

/// Builds the event routing table.
#[must_use]
pub fn build(secrets: &Arc<Secrets>) -> EventRouter {
    let mut router = EventRouter::new();

    let s = Arc::clone(secrets);
    router.register("DailyProcessing", move || {
        ops::data_sync::process_daily_tasks(Arc::clone(&s))
    });

    let s = Arc::clone(secrets);
    router.register("DataSync", move || ops::data_sync::sync_data(Arc::clone(&s)));

    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecretsConfig;
    use crate::secrets::testing::StaticStore;

    #[test]
    fn registers_the_known_events() {
        let secrets = Arc::new(Secrets::new(
            Arc::new(StaticStore::default()),
            &SecretsConfig::default(),
        ));
        let router = build(&secrets);
        assert_eq!(router.event_names(), vec!["DailyProcessing", "DataSync"]);
    }
}
