//! Wire envelopes for both trigger types.
//!
//! `ApiRequest`/`ApiResponse` follow the API Gateway Lambda proxy format;
//! `EventRequest`/`EventResponse` cover scheduled/event triggers. All
//! structs use `#[serde(rename_all = "camelCase")]` to match the hosting
//! environment's JSON field names.
//!
//! Every invocation produces exactly one response envelope, success or
//! failure — there is no partial or streaming response.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Event name used when the inbound payload carries no `name` field.
pub const DEFAULT_EVENT_NAME: &str = "DailyProcessing";

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

/// Standard CORS header set attached to every HTTP response, including
/// error envelopes and OPTIONS preflight replies.
#[must_use]
pub fn cors_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        ),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Methods".to_string(),
            "OPTIONS,POST,GET".to_string(),
        ),
        ("Access-Control-Max-Age".to_string(), "86400".to_string()),
    ])
}

// ---------------------------------------------------------------------------
// HTTP (API Gateway proxy) envelopes
// ---------------------------------------------------------------------------

/// Inbound HTTP request in API Gateway Lambda proxy input format.
///
/// All fields are defaulted so partial payloads (as produced by local test
/// event files) still deserialize.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiRequest {
    /// Resource path, e.g. `"/hello"`.
    pub resource: String,
    pub http_method: String,
    pub headers: HashMap<String, String>,
    /// `null` when the request has no query string.
    pub query_string_parameters: Option<HashMap<String, String>>,
    /// Raw request body, if any. Parsed lazily via [`ApiRequest::parsed_body`].
    pub body: Option<String>,
}

impl ApiRequest {
    /// Routing key: the resource path with its leading slash stripped.
    #[must_use]
    pub fn route_key(&self) -> &str {
        self.resource.strip_prefix('/').unwrap_or(&self.resource)
    }

    /// Caller IP from the `X-Forwarded-For` header, `"unknown"` if absent.
    #[must_use]
    pub fn source_ip(&self) -> &str {
        self.headers
            .get("X-Forwarded-For")
            .map_or("unknown", String::as_str)
    }

    /// Request origin from the `Origin` header, `"unknown"` if absent.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.headers.get("Origin").map_or("unknown", String::as_str)
    }

    /// Query parameters, defaulting to an empty map when `null`/absent.
    #[must_use]
    pub fn query_params(&self) -> HashMap<String, String> {
        self.query_string_parameters.clone().unwrap_or_default()
    }

    /// Best-effort JSON parse of the raw body.
    ///
    /// An empty or malformed body yields an empty object; this never fails.
    #[must_use]
    pub fn parsed_body(&self) -> Value {
        self.body
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_else(|| Value::Object(Map::new()))
    }
}

/// Outbound HTTP response in API Gateway Lambda proxy output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl ApiResponse {
    /// Reply to an OPTIONS preflight: 200, CORS headers, no body.
    #[must_use]
    pub fn preflight() -> Self {
        Self {
            status_code: 200,
            body: String::new(),
            headers: cors_headers(),
        }
    }
}

// ---------------------------------------------------------------------------
// Event envelopes
// ---------------------------------------------------------------------------

/// Inbound scheduled/event payload. Extra fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventRequest {
    pub name: Option<String>,
}

impl EventRequest {
    /// Routing key: the `name` field, defaulting to
    /// [`DEFAULT_EVENT_NAME`] when absent.
    #[must_use]
    pub fn event_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_EVENT_NAME)
    }
}

/// Outbound event response: status plus JSON-encoded body, no headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub status_code: u16,
    pub body: String,
}

// ---------------------------------------------------------------------------
// Response body variants
// ---------------------------------------------------------------------------

/// Tagged response-body shape, decided at the route-definition level.
///
/// `Flattened` returns the operation result as the body itself (string
/// results pass through without re-encoding); `Enveloped` nests it under
/// the standard `{message, response}` wrapper; `Error` is the uniform
/// failure shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Flattened(Value),
    Enveloped { message: String, response: Value },
    Error { error: String, message: String },
}

impl ResponseBody {
    /// Encodes the body to the string carried in the envelope.
    #[must_use]
    pub fn encode(self) -> String {
        match self {
            Self::Flattened(Value::String(s)) => s,
            Self::Flattened(value) => value.to_string(),
            Self::Enveloped { message, response } => {
                json!({ "message": message, "response": response }).to_string()
            }
            Self::Error { error, message } => {
                json!({ "error": error, "message": message }).to_string()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway_request() -> ApiRequest {
        serde_json::from_value(json!({
            "resource": "/hello",
            "httpMethod": "GET",
            "headers": {
                "X-Forwarded-For": "203.0.113.7",
                "Origin": "https://example.com"
            },
            "queryStringParameters": null,
            "body": null
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_gateway_proxy_input() {
        let req = gateway_request();
        assert_eq!(req.resource, "/hello");
        assert_eq!(req.http_method, "GET");
        assert_eq!(req.source_ip(), "203.0.113.7");
        assert_eq!(req.origin(), "https://example.com");
    }

    #[test]
    fn route_key_strips_leading_slash() {
        assert_eq!(gateway_request().route_key(), "hello");

        let bare = ApiRequest {
            resource: "health".to_string(),
            ..ApiRequest::default()
        };
        assert_eq!(bare.route_key(), "health");
    }

    #[test]
    fn missing_headers_fall_back_to_unknown() {
        let req = ApiRequest::default();
        assert_eq!(req.source_ip(), "unknown");
        assert_eq!(req.origin(), "unknown");
    }

    #[test]
    fn null_query_params_become_empty_map() {
        assert!(gateway_request().query_params().is_empty());
    }

    #[test]
    fn parsed_body_handles_valid_json() {
        let req = ApiRequest {
            body: Some(r#"{"key": "value"}"#.to_string()),
            ..ApiRequest::default()
        };
        assert_eq!(req.parsed_body()["key"], "value");
    }

    #[test]
    fn parsed_body_never_fails_on_malformed_input() {
        for raw in [Some("{not json"), Some(""), None] {
            let req = ApiRequest {
                body: raw.map(String::from),
                ..ApiRequest::default()
            };
            assert_eq!(req.parsed_body(), Value::Object(Map::new()));
        }
    }

    #[test]
    fn event_name_defaults_to_daily_processing() {
        let empty: EventRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.event_name(), "DailyProcessing");

        let named: EventRequest =
            serde_json::from_value(json!({ "name": "DataSync", "extra": 1 })).unwrap();
        assert_eq!(named.event_name(), "DataSync");
    }

    #[test]
    fn cors_header_set_is_complete() {
        let headers = cors_headers();
        assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "OPTIONS,POST,GET");
        assert_eq!(headers["Access-Control-Max-Age"], "86400");
        assert_eq!(headers.len(), 4);
    }

    #[test]
    fn preflight_has_cors_headers_and_empty_body() {
        let resp = ApiResponse::preflight();
        assert_eq!(resp.status_code, 200);
        assert!(resp.body.is_empty());
        assert_eq!(resp.headers, cors_headers());
    }

    #[test]
    fn flattened_string_is_not_double_encoded() {
        let body = ResponseBody::Flattened(Value::String("plain text".to_string()));
        assert_eq!(body.encode(), "plain text");
    }

    #[test]
    fn flattened_object_is_json_encoded() {
        let body = ResponseBody::Flattened(json!({ "a": 1 }));
        assert_eq!(body.encode(), r#"{"a":1}"#);
    }

    #[test]
    fn enveloped_body_nests_under_message_and_response() {
        let body = ResponseBody::Enveloped {
            message: "API:hello successfully processed".to_string(),
            response: json!({ "greeting": "hi" }),
        };
        let decoded: Value = serde_json::from_str(&body.encode()).unwrap();
        assert_eq!(decoded["message"], "API:hello successfully processed");
        assert_eq!(decoded["response"]["greeting"], "hi");
    }

    #[test]
    fn error_body_carries_error_and_message() {
        let body = ResponseBody::Error {
            error: "boom".to_string(),
            message: "Error processing API:unknown".to_string(),
        };
        let decoded: Value = serde_json::from_str(&body.encode()).unwrap();
        assert_eq!(decoded["error"], "boom");
        assert_eq!(decoded["message"], "Error processing API:unknown");
    }
}
