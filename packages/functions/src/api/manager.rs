//! HTTP manager: try/log/finally wrapper around route dispatch.
//!
//! Every invocation yields exactly one [`ApiResponse`], success or
//! failure. Failures between lookup and envelope construction are caught
//! here and converted to a 500 error envelope; the error chain is logged
//! server-side only.

use std::time::Duration;

use tracing::{debug, info, info_span, warn, Instrument};
use waypost_core::{cors_headers, ApiRequest, ApiResponse, InvocationContext, ResponseBody};

use crate::api::router::ApiRouter;
use crate::observability::log_error_chain;
use crate::operation::DispatchError;

/// Handles one HTTP invocation end to end.
pub async fn handle(
    router: &ApiRouter,
    ctx: &InvocationContext,
    request: &ApiRequest,
) -> ApiResponse {
    let route_key = request.route_key().to_string();
    let span = info_span!(
        "api_request",
        classifier = %format!("API:{route_key}"),
        request_id = %ctx.request_id,
    );
    dispatch(router, ctx, request, &route_key)
        .instrument(span)
        .await
}

async fn dispatch(
    router: &ApiRouter,
    ctx: &InvocationContext,
    request: &ApiRequest,
    route_key: &str,
) -> ApiResponse {
    info!("Request ID: {}", ctx.request_id);
    info!("API Name: {route_key}");

    let mut budget = None;
    let response = if request.http_method == "OPTIONS" {
        // Preflight: standard CORS headers, no body processing, no
        // operation invocation.
        info!("OPTIONS:{route_key} | SKIPPING");
        ApiResponse::preflight()
    } else {
        match execute(router, request, route_key, &mut budget).await {
            Ok(response) => response,
            Err(err) => {
                log_error_chain(&err);
                ApiResponse {
                    status_code: 500,
                    body: ResponseBody::Error {
                        error: err.to_string(),
                        message: format!("Error processing API:{route_key}"),
                    }
                    .encode(),
                    headers: cors_headers(),
                }
            }
        }
    };

    let elapsed = ctx.elapsed();
    info!("TotalExecDuration: {} ms", elapsed.as_millis());
    if let Some(budget) = budget {
        if elapsed > budget {
            // Post-hoc observability only; the operation already
            // completed and the response stands.
            warn!(
                "Timeout recorded: {}s > {}s",
                elapsed.as_secs(),
                budget.as_secs()
            );
        }
    }
    response
}

async fn execute(
    router: &ApiRouter,
    request: &ApiRequest,
    route_key: &str,
    budget: &mut Option<Duration>,
) -> Result<ApiResponse, DispatchError> {
    // Body and query parameters are extracted and logged, but operations
    // are zero-argument: their inputs are route-configured, not
    // request-supplied.
    let query_params = request.query_params();
    let body = request.parsed_body();
    debug!(
        ?query_params,
        %body,
        source_ip = request.source_ip(),
        origin = request.origin(),
        "request parsed"
    );

    let entry = router.lookup(route_key)?;
    *budget = entry.timeout;

    let result = (entry.operation)().await?;
    info!("Execution successful: {route_key}");

    let response_body = if entry.flatten_response {
        ResponseBody::Flattened(result)
    } else {
        ResponseBody::Enveloped {
            message: format!("API:{route_key} successfully processed"),
            response: result,
        }
    };

    let mut headers = cors_headers();
    headers.extend(entry.extra_headers.clone());

    Ok(ApiResponse {
        status_code: 200,
        body: response_body.encode(),
        headers,
    })
}
