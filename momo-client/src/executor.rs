//! Request executor.
//!
//! Performs one HTTP call through the injected transport and normalizes the
//! outcome:
//!
//! | Response                | Result                                  |
//! |-------------------------|-----------------------------------------|
//! | 2xx / 3xx               | `Ok`, content decoded when requested    |
//! | 4xx                     | `Ok`, content is the raw body text      |
//! | 5xx                     | `Err(GatewayError::Server)`             |
//! | any other status        | `Err(GatewayError::UnexpectedStatus)`   |
//! | no response             | `Err(GatewayError::RequestFailed)`      |
//! | anything else           | `Err(GatewayError::Request)`            |

use serde_json::Value;

use momo_types::{
    Content, GatewayError, GatewayResponse, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
    OperationResult,
};

/// Executes gateway calls against a fixed base URL.
pub struct RequestExecutor<T: HttpTransport> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> RequestExecutor<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// An empty endpoint targets the base URL itself.
    pub fn url_for(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Sends one request and classifies the response.
    ///
    /// A `None`, `null` or empty-object body is not sent at all.
    pub async fn execute(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<Value>,
        headers: Vec<(String, String)>,
        decode: bool,
    ) -> OperationResult {
        let body = body.filter(|b| !is_empty_body(b));
        let request = HttpRequest {
            method,
            url: self.url_for(endpoint),
            headers,
            body,
        };

        let response = self.transport.send(request).await?;
        classify(response, decode)
    }
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Maps a received response onto the result taxonomy.
pub fn classify(response: HttpResponse, decode: bool) -> OperationResult {
    let HttpResponse { status, body } = response;
    match status {
        200..=399 => {
            let content = if decode {
                Content::decode(body)
            } else {
                Content::Text(body)
            };
            Ok(GatewayResponse {
                status_code: status,
                content,
            })
        }
        400..=499 => Ok(GatewayResponse {
            status_code: status,
            content: Content::Text(body),
        }),
        500..=599 => Err(GatewayError::Server { status, body }),
        _ => Err(GatewayError::UnexpectedStatus(status)),
    }
}
