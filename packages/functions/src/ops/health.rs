//! Greeting and health-check operations.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::info;

use crate::operation::OperationError;
use crate::secrets::Secrets;

/// Returns a greeting plus the configured database URL (no credentials).
pub async fn say_hello(secrets: Arc<Secrets>) -> Result<Value, OperationError> {
    let supabase_url = secrets.get_value("SUPABASE_URL", "Not configured").await;
    info!("Hello request received, Supabase URL: {supabase_url}");

    Ok(json!({
        "message": "Hello from Lambda!",
        "supabase_url": supabase_url,
    }))
}

/// Reports API health and the configured database URL.
pub async fn check_health(secrets: Arc<Secrets>) -> Result<Value, OperationError> {
    let supabase_url = secrets.get_value("SUPABASE_URL", "Not configured").await;
    info!("Health check requested, Supabase URL: {supabase_url}");

    Ok(json!({
        "status": "healthy",
        "supabase_connection": supabase_url,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
