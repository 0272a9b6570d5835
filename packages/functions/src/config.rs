//! Runtime configuration for the function package.

use std::env;
use std::path::PathBuf;

/// Environment variable set by the managed execution environment.
///
/// Its absence signals a local development run, in which case secret
/// initialization prefers the local override file over the remote store.
pub const EXECUTION_ENV_MARKER: &str = "AWS_EXECUTION_ENV";

/// Secret bundle key holding the desired log level.
pub const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

/// Secret resolution configuration.
#[derive(Debug, Clone)]
pub struct SecretsConfig {
    /// Name of the default secret bundle in the managed store.
    pub secret_name: String,
    /// Local JSON file of `{secretName: {key: value}}` consulted only
    /// outside the managed execution environment.
    pub local_secrets_path: PathBuf,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            secret_name: "waypost-app-secrets".to_string(),
            local_secrets_path: PathBuf::from("local_secrets.json"),
        }
    }
}

impl SecretsConfig {
    /// Builds the configuration, letting environment variables override
    /// the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(name) = env::var("WAYPOST_SECRET_NAME") {
            config.secret_name = name;
        }
        if let Ok(path) = env::var("WAYPOST_LOCAL_SECRETS") {
            config.local_secrets_path = PathBuf::from(path);
        }
        config
    }
}

/// True when running inside the managed execution environment.
#[must_use]
pub fn is_managed_environment() -> bool {
    env::var_os(EXECUTION_ENV_MARKER).is_some()
}
