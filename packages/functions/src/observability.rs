//! Tracing setup and error-chain logging.
//!
//! Invocation tagging is request-scoped: each manager enters a span
//! carrying `classifier` and `request_id` fields, so concurrent
//! invocations in one process never cross-contaminate their tags.

use tracing::error;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (typically the
/// `LOG_LEVEL` secret) seeds the filter. Safe to call more than once;
/// later calls are no-ops.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_lowercase()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Emits one error record per link in the cause chain.
///
/// Stack traces stay server-side; callers only ever see the envelope.
pub fn log_error_chain(err: &(dyn std::error::Error + 'static)) {
    error!("{err}");
    let mut source = err.source();
    while let Some(cause) = source {
        error!("caused by: {cause}");
        source = cause.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer failure")]
    struct Outer(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("inner failure")]
    struct Inner;

    #[test]
    fn walks_the_full_chain_without_panicking() {
        log_error_chain(&Outer(Inner));
    }

    #[test]
    fn init_is_idempotent() {
        init("INFO");
        init("DEBUG");
    }
}
