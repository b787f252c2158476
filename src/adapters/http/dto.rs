//! Shared HTTP envelopes.
//!
//! Every route answers with one of these shapes: a success envelope carrying
//! the normalized upstream result, or an error envelope with the status code
//! repeated in the body. Validation failures use `message`, upstream and
//! internal failures use `error` - matching the public contract of the
//! gateway.

use serde::Serialize;
use serde_json::Value;

/// Success envelope for the stateless pass-through routes.
#[derive(Debug, Clone, Serialize)]
pub struct PassthroughResponse {
    pub status: u16,
    pub result: Value,
}

impl PassthroughResponse {
    pub fn new(result: Value) -> Self {
        Self {
            status: 200,
            result,
        }
    }
}

/// Error envelope for any route.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// 400 for a missing or empty required parameter, naming it.
    pub fn missing_parameter(name: &str) -> Self {
        Self {
            status: 400,
            message: Some(format!("Missing required parameter: {name}")),
            error: None,
        }
    }

    /// 500 carrying an upstream or internal failure detail.
    pub fn upstream(detail: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: None,
            error: Some(detail.into()),
        }
    }

    /// 404 for a path no route serves.
    pub fn not_found() -> Self {
        Self {
            status: 404,
            message: Some("Route not found".to_string()),
            error: None,
        }
    }
}
