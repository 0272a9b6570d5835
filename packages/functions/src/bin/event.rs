//! Scheduled/event entry point: event payloads in, status envelopes out.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use waypost_core::{EventRequest, EventResponse, InvocationContext};
use waypost_functions::{event, Bootstrap, SecretsConfig};

async fn function_handler(
    bootstrap: &Bootstrap,
    invocation: LambdaEvent<EventRequest>,
) -> Result<EventResponse, Error> {
    let ctx = InvocationContext::new(invocation.context.request_id.clone());
    tracing::info!("Event triggered");
    tracing::debug!(payload = ?invocation.payload, "Event data");
    Ok(event::manager::handle(&bootstrap.event_router, &ctx, &invocation.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let bootstrap = Bootstrap::init(SecretsConfig::from_env()).await?;
    run(service_fn(|invocation| {
        function_handler(&bootstrap, invocation)
    }))
    .await
}
