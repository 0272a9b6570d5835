//! Event manager: try/log/finally wrapper around event dispatch.
//!
//! Simpler than the HTTP path: no preflight, no headers, no
//! response-shape flags, no timeout budget. Failures are still caught
//! once here and converted to the 500 envelope.

use serde_json::Value;
use tracing::{info, info_span, Instrument};
use waypost_core::{EventRequest, EventResponse, InvocationContext, ResponseBody};

use crate::event::router::EventRouter;
use crate::observability::log_error_chain;
use crate::operation::DispatchError;

/// Handles one event invocation end to end.
pub async fn handle(
    router: &EventRouter,
    ctx: &InvocationContext,
    request: &EventRequest,
) -> EventResponse {
    let event_name = request.event_name().to_string();
    let span = info_span!(
        "event",
        classifier = %format!("EVENT:{event_name}"),
        request_id = %ctx.request_id,
    );
    dispatch(router, ctx, &event_name).instrument(span).await
}

async fn dispatch(router: &EventRouter, ctx: &InvocationContext, event_name: &str) -> EventResponse {
    info!("Request ID: {}", ctx.request_id);
    info!("Event Name: {event_name}");

    let response = match execute(router, event_name).await {
        Ok(result) => EventResponse {
            status_code: 200,
            body: ResponseBody::Enveloped {
                message: format!("EVENT:{event_name} successfully processed"),
                response: result,
            }
            .encode(),
        },
        Err(err) => {
            log_error_chain(&err);
            EventResponse {
                status_code: 500,
                body: ResponseBody::Error {
                    error: err.to_string(),
                    message: format!("Error processing EVENT:{event_name}"),
                }
                .encode(),
            }
        }
    };

    info!("TotalExecDuration: {} ms", ctx.elapsed().as_millis());
    response
}

async fn execute(router: &EventRouter, event_name: &str) -> Result<Value, DispatchError> {
    let operation = router.lookup(event_name)?;
    let result = operation().await?;
    info!("Execution successful: {event_name}");
    Ok(result)
}
