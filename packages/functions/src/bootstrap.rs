//! Cold-start wiring shared by all entry points.
//!
//! Built once per process activation: secret cache initialization, the
//! tracing filter (seeded from the `LOG_LEVEL` secret), and both static
//! routing tables.

use std::sync::Arc;

use tracing::info;

use crate::config::{self, SecretsConfig, LOG_LEVEL_KEY};
use crate::secrets::{AwsSecretStore, SecretStore, Secrets};
use crate::{api, event, observability};

/// Process-wide state handed to the per-invocation handlers.
pub struct Bootstrap {
    pub secrets: Arc<Secrets>,
    pub api_router: api::ApiRouter,
    pub event_router: event::EventRouter,
}

impl Bootstrap {
    /// Initializes against the managed secret store.
    ///
    /// # Errors
    ///
    /// Fails the cold start when the secret bundle cannot be resolved
    /// from either the local override file or the remote store.
    pub async fn init(config: SecretsConfig) -> anyhow::Result<Self> {
        let store = Arc::new(AwsSecretStore::connect().await);
        Self::with_store(config, store).await
    }

    /// Initializes with an explicit store backend.
    ///
    /// # Errors
    ///
    /// Same failure mode as [`Bootstrap::init`].
    pub async fn with_store(
        config: SecretsConfig,
        store: Arc<dyn SecretStore>,
    ) -> anyhow::Result<Self> {
        let secrets = Arc::new(Secrets::new(store, &config));

        // Outside the managed environment the local override file is
        // consulted first; inside it the remote store is authoritative.
        let local_override =
            (!config::is_managed_environment()).then(|| config.local_secrets_path.clone());
        secrets.init(local_override.as_deref()).await?;

        let level = secrets.get_value(LOG_LEVEL_KEY, "INFO").await;
        observability::init(&level);
        info!("Secrets loaded successfully");

        let api_router = api::routes::build(&secrets);
        let event_router = event::routes::build(&secrets);

        Ok(Self {
            secrets,
            api_router,
            event_router,
        })
    }
}
