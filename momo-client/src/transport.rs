//! `reqwest` adapter for the `HttpTransport` port.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use momo_types::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Sends gateway requests over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's default settings.
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Creates a transport whose calls give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;
        Ok(Self { http })
    }

    /// Wraps an already configured client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            let payload =
                serde_json::to_vec(body).map_err(|e| TransportError::Other(e.to_string()))?;
            builder = builder.body(payload);
        }

        // Every failure of `send` means no response was received.
        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError::NoResponse(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
