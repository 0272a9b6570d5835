//! Secret store backends.
//!
//! The managed store is AWS Secrets Manager; tests substitute in-memory
//! stores through the [`SecretStore`] trait.

use async_trait::async_trait;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;

use super::SecretError;

/// A key-value secret service queried by name, returning the raw secret
/// payload as a string (JSON document or plain text).
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetches the named secret's string payload.
    ///
    /// # Errors
    ///
    /// Returns a classified [`SecretError`] when the store rejects the
    /// request or the secret has no string payload.
    async fn fetch(&self, name: &str) -> Result<String, SecretError>;
}

/// AWS Secrets Manager backend.
pub struct AwsSecretStore {
    client: aws_sdk_secretsmanager::Client,
}

impl AwsSecretStore {
    /// Builds a client from the default credential/region chain.
    pub async fn connect() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_secretsmanager::Client::new(&config),
        }
    }
}

#[async_trait]
impl SecretStore for AwsSecretStore {
    async fn fetch(&self, name: &str) -> Result<String, SecretError> {
        tracing::info!("Fetching secret {name} from the managed store");
        let output = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|err| classify(name, &err.into_service_error()))?;

        // Binary-encoded secrets are unsupported; only the string payload
        // is accepted.
        output
            .secret_string()
            .map(str::to_string)
            .ok_or_else(|| SecretError::BinaryUnsupported {
                name: name.to_string(),
            })
    }
}

/// Maps the managed store's error codes onto the [`SecretError`] taxonomy.
fn classify(name: &str, err: &GetSecretValueError) -> SecretError {
    let name = name.to_string();
    if err.is_decryption_failure() {
        SecretError::DecryptionFailure { name }
    } else if err.is_internal_service_error() {
        SecretError::InternalError { name }
    } else if err.is_invalid_parameter_exception() {
        SecretError::InvalidParameter { name }
    } else if err.is_invalid_request_exception() {
        SecretError::InvalidRequest { name }
    } else if err.is_resource_not_found_exception() {
        SecretError::NotFound { name }
    } else {
        SecretError::Unknown {
            name,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory stores shared by the crate's test modules.

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::{SecretError, SecretStore};

    /// Serves fixed payloads and counts fetches.
    #[derive(Default)]
    pub(crate) struct StaticStore {
        payloads: HashMap<String, String>,
        fetches: AtomicUsize,
    }

    impl StaticStore {
        pub(crate) fn with_secret(name: &str, payload: &str) -> Self {
            let mut store = Self::default();
            store
                .payloads
                .insert(name.to_string(), payload.to_string());
            store
        }

        pub(crate) fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SecretStore for StaticStore {
        async fn fetch(&self, name: &str) -> Result<String, SecretError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.payloads
                .get(name)
                .cloned()
                .ok_or_else(|| SecretError::NotFound {
                    name: name.to_string(),
                })
        }
    }

    /// Fails every fetch with the given classification.
    pub(crate) struct FailingStore;

    #[async_trait]
    impl SecretStore for FailingStore {
        async fn fetch(&self, name: &str) -> Result<String, SecretError> {
            Err(SecretError::InternalError {
                name: name.to_string(),
            })
        }
    }
}
