//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::traits::{MappingCall, Transport, TransportResponse};
use crate::errors::FigiError;

/// Public OpenFIGI mapping endpoint.
pub const API_URL: &str = "https://api.openfigi.com/v1/mapping";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-OPENFIGI-APIKEY";

/// HTTP transport for the mapping endpoint.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport posting to the public endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(API_URL)
    }

    /// Create a transport posting to another endpoint (proxies, tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_mapping(&self, call: MappingCall<'_>) -> Result<TransportResponse, FigiError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .timeout(call.timeout)
            .body(call.body.to_vec());

        if let Some(api_key) = call.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        debug!(
            "OpenFIGI request: POST {} ({} bytes, api key: {})",
            self.endpoint,
            call.body.len(),
            call.api_key.is_some()
        );

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            // The body of a rejected call is never inspected, so it is not read.
            warn!("OpenFIGI returned HTTP {}", status);
            return Ok(TransportResponse {
                status,
                body: Vec::new(),
            });
        }
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
