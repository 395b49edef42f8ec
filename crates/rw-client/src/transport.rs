//! HTTP transport layer for RhymeWatch service requests

use reqwest::{Client, Response};
use rw_core::{Config, Endpoint, Error, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Characters of an unparseable body echoed back in the error message
const BODY_SNIPPET_CHARS: usize = 200;

/// HTTP transport layer for making requests to the analysis service.
///
/// Every call is a single attempt; failures are reported, never retried.
pub struct Transport {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = config.timeout_secs.map(Duration::from_secs);

        let mut builder = Client::builder().user_agent(rw_core::USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_string(), timeout })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock() -> Self {
        Self { client: Client::new(), base_url: "http://mock.rhymewatch.local".to_string(), timeout: None }
    }

    /// Make a GET request to the analysis service
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The service path to call
    /// * `params` - Query parameters, appended in order
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing the deserialized response or an error
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    pub async fn get<T>(&self, endpoint: Endpoint, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(endpoint, params)?;
        debug!("Making request to: {}", url);

        let response = self.make_request(url).await?;
        let text = response.text().await.map_err(|e| {
            warn!("Failed to read response body: {}", e);
            Error::Network(format!("Failed to read response body: {}", e))
        })?;

        debug!("Response body length: {} bytes", text.len());

        match serde_json::from_str::<T>(&text) {
            Ok(data) => {
                info!("Successfully parsed response for endpoint: /{}", endpoint);
                Ok(data)
            }
            Err(e) => {
                error!("Failed to parse JSON response: {}", e);
                Err(Error::Parse(format!(
                    "Failed to parse response: {}. Response: {}",
                    e,
                    snippet(&text)
                )))
            }
        }
    }

    /// Build the full URL for a request
    fn build_url(&self, endpoint: Endpoint, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, endpoint))
            .map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

        if !params.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Make the actual HTTP request
    async fn make_request(&self, url: Url) -> Result<Response> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Request failed: {}", e);
            Error::Network(describe_transport_error(&e))
        })?;

        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            Ok(response)
        } else {
            error!("Request failed with status: {}", status);
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            // the body is informational only, a failed read must not mask the status
            let detail = response.text().await.ok().and_then(|body| extract_detail(&body));
            Err(Error::Http { status: status.as_u16(), status_text, detail })
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get request timeout duration, if one was configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

/// Pull `detail` out of an error body such as `{"detail": "No news found for XYZ."}`
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn snippet(text: &str) -> String {
    text.chars().take(BODY_SNIPPET_CHARS).collect()
}
