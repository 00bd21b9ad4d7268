//! HTTP traffic and results described as plain data.
//!
//! The client builds `HttpRequest` values and hands them to an
//! `HttpTransport`; whatever comes back is an `HttpResponse` that the
//! request executor classifies into a `GatewayResponse` or an error.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GatewayError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A request ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Sent JSON-encoded when present.
    pub body: Option<Value>,
}

/// A response as received by a transport, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Response payload: decoded JSON, or the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Json(Value),
    Text(String),
}

impl Content {
    /// Decodes `body` as JSON, keeping the raw text when it is not valid JSON.
    pub fn decode(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => Content::Json(value),
            Err(_) => Content::Text(body),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Content::Json(v) => Some(v),
            Content::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Json(_) => None,
            Content::Text(s) => Some(s),
        }
    }
}

/// Successful gateway call: status code plus content.
///
/// 4xx answers also land here; check `status_code` or `is_client_error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub content: Content,
}

impl GatewayResponse {
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }
}

/// Outcome of every public gateway operation.
pub type OperationResult = Result<GatewayResponse, GatewayError>;
