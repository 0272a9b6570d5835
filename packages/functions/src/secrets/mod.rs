//! Secret resolution: resolve named bundles once per process, cache them,
//! and expose key-level lookup with a default fallback.
//!
//! The cache is populated lazily and never invalidated except via an
//! explicit forced refresh. Lock guards are never held across an await.

mod store;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{json, Map, Value};
use tracing::{debug, error, info, warn};

pub use store::{AwsSecretStore, SecretStore};

/// Classified secret-fetch failure, one variant per managed-store error
/// code plus the unsupported-payload and catch-all cases.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("decryption failure when accessing secret {name}")]
    DecryptionFailure { name: String },
    #[error("internal service error when accessing secret {name}")]
    InternalError { name: String },
    #[error("invalid parameter when accessing secret {name}")]
    InvalidParameter { name: String },
    #[error("invalid request when accessing secret {name}")]
    InvalidRequest { name: String },
    #[error("secret {name} not found")]
    NotFound { name: String },
    #[error("binary secrets are not supported for {name}")]
    BinaryUnsupported { name: String },
    #[error("unknown error when accessing secret {name}: {message}")]
    Unknown { name: String, message: String },
}

/// Process-wide secret cache in front of a [`SecretStore`].
pub struct Secrets {
    store: Arc<dyn SecretStore>,
    default_secret_name: String,
    cache: RwLock<HashMap<String, Value>>,
}

impl Secrets {
    #[must_use]
    pub fn new(store: Arc<dyn SecretStore>, config: &crate::config::SecretsConfig) -> Self {
        Self {
            store,
            default_secret_name: config.secret_name.clone(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolves a named secret bundle, cache-first.
    ///
    /// Non-JSON payloads fall back to `{"value": <raw>}`.
    ///
    /// # Errors
    ///
    /// Propagates the classified fetch failure; cached values never fail.
    pub async fn get(&self, name: &str) -> Result<Value, SecretError> {
        self.get_with_refresh(name, false).await
    }

    /// Like [`Secrets::get`], but `force_refresh` bypasses the cache.
    ///
    /// # Errors
    ///
    /// Propagates the classified fetch failure.
    pub async fn get_with_refresh(
        &self,
        name: &str,
        force_refresh: bool,
    ) -> Result<Value, SecretError> {
        if !force_refresh {
            if let Some(cached) = self.cache.read().get(name) {
                debug!("Using cached secret for {name}");
                return Ok(cached.clone());
            }
        }

        let raw = self.store.fetch(name).await?;
        let value = serde_json::from_str(&raw).unwrap_or_else(|_| json!({ "value": raw }));
        self.cache.write().insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Returns `bundle[key]` from the default bundle, or `default`.
    ///
    /// Any failure during resolution is swallowed and `default` is
    /// returned; this never propagates.
    pub async fn get_value(&self, key: &str, default: &str) -> String {
        match self.get(&self.default_secret_name).await {
            Ok(bundle) => match bundle.get(key) {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => default.to_string(),
            },
            Err(err) => {
                error!(
                    "Error retrieving value from secret {}: {err}",
                    self.default_secret_name
                );
                default.to_string()
            }
        }
    }

    /// Resolves several bundles, continuing past individual failures.
    pub async fn load_many(&self, names: &[&str]) -> HashMap<String, Value> {
        let mut loaded = HashMap::new();
        for &name in names {
            match self.get(name).await {
                Ok(value) => {
                    loaded.insert(name.to_string(), value);
                }
                Err(err) => error!("Failed to load secret {name}: {err}"),
            }
        }
        loaded
    }

    /// Initializes the cache at process start.
    ///
    /// With a local override file (dev mode), its bundles are loaded into
    /// the cache instead of calling the remote store; file failures are
    /// logged and fall through to a remote fetch of the default bundle.
    ///
    /// # Errors
    ///
    /// Propagates the remote fetch failure when no local override applies.
    pub async fn init(&self, local_override: Option<&Path>) -> Result<Value, SecretError> {
        if let Some(path) = local_override {
            info!("Running in local environment, checking for local secrets file");
            match load_local_file(path) {
                Ok(bundles) => {
                    let names: Vec<&String> = bundles.keys().collect();
                    info!("Loaded secrets from local file: {names:?}");
                    let mut cache = self.cache.write();
                    for (name, value) in &bundles {
                        cache.insert(name.clone(), value.clone());
                    }
                    return Ok(cache
                        .get(&self.default_secret_name)
                        .cloned()
                        .unwrap_or_else(|| Value::Object(Map::new())));
                }
                Err(err) => warn!("Failed to load local secrets: {err}"),
            }
        }
        self.get(&self.default_secret_name).await
    }
}

/// Reads a `{secretName: {key: value}}` JSON file.
fn load_local_file(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    value
        .as_object()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("local secrets file must hold a JSON object"))
}

#[cfg(test)]
pub(crate) use store::testing;
