//! HTTP API entry point: API Gateway proxy events in, response envelopes out.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use waypost_core::{ApiRequest, ApiResponse, InvocationContext};
use waypost_functions::{api, Bootstrap, SecretsConfig};

async fn function_handler(
    bootstrap: &Bootstrap,
    event: LambdaEvent<ApiRequest>,
) -> Result<ApiResponse, Error> {
    let ctx = InvocationContext::new(event.context.request_id.clone());
    tracing::info!("API request received");
    Ok(api::manager::handle(&bootstrap.api_router, &ctx, &event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let bootstrap = Bootstrap::init(SecretsConfig::from_env()).await?;
    run(service_fn(|event| function_handler(&bootstrap, event))).await
}
