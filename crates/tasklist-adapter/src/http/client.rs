/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{Result, TasklistError};
use crate::types::ErrorBody;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the task service
#[derive(Debug, Clone)]
pub struct TasklistClient {
    http_client: Client,
    base_url: Url,
}

impl TasklistClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(TasklistError::Request(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL by appending path segments to the base URL path
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TasklistError::Request(format!("base URL {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build request builder for a task service endpoint
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint_url(segments)?;
        debug!(%method, %url, "building request");
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode a JSON success body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| TasklistError::InvalidResponse(err.to_string()))
    }

    /// Send a request, discarding any success body
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        self.send(builder).await.map(|_| ())
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http_client.execute(request).await.inspect_err(|err| {
            warn!(%method, %url, error = %err, "request failed without response");
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(%method, %url, status = status.as_u16(), "request succeeded");
            return Ok(response);
        }

        // A failure body that cannot be read is treated as carrying no message.
        let body = response.bytes().await.unwrap_or_default();
        let message = ErrorBody::message_from_bytes(&body);
        warn!(
            %method,
            %url,
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "request returned error status"
        );
        Err(TasklistError::api_error(status, message))
    }
}
