//! HTTP Client Implementation using Reqwest

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RetryPolicy},
};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Reqwest-based HTTP client
///
/// Owns connection pooling, TLS, and the retry loop for transient
/// failures: 429 and 5xx responses are retried with exponential backoff,
/// honoring a `Retry-After` header when the server sends one. Any other
/// status is handed back to the caller untouched.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP client with custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .user_agent("document-projects-core/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Create a new HTTP client from an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn build_request(&self, request: &HttpRequest) -> reqwest::RequestBuilder {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        builder
    }
}

fn is_retryable(status: u16) -> bool {
    status == 429 || status >= 500
}

/// Server-requested delay from a `Retry-After` header, seconds form only
fn retry_after(response: &reqwest::Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

async fn into_response(response: reqwest::Response) -> Result<HttpResponse> {
    let status = response.status().as_u16();

    let headers: HashMap<String, String> = response
        .headers()
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|s| (k.to_string(), s.to_string())))
        .collect();

    let body = response
        .bytes()
        .await
        .map_err(|e| BridgeError::OperationFailed(format!("Failed to read body: {}", e)))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn map_send_error(error: reqwest::Error) -> BridgeError {
    if error.is_timeout() {
        BridgeError::OperationFailed("Request timed out".to_string())
    } else if error.is_connect() {
        BridgeError::OperationFailed(format!("Connection failed: {}", error))
    } else {
        BridgeError::OperationFailed(error.to_string())
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.execute_with_retry(request, RetryPolicy::default())
            .await
    }

    async fn execute_with_retry(
        &self,
        request: HttpRequest,
        policy: RetryPolicy,
    ) -> Result<HttpResponse> {
        let mut last_error = None;

        for attempt in 1..=policy.max_attempts {
            debug!(
                attempt,
                max_attempts = policy.max_attempts,
                url = %request.url,
                "Executing HTTP request"
            );

            let outcome = self.build_request(&request).send().await;

            let server_delay = match outcome {
                Ok(response) if is_retryable(response.status().as_u16()) => {
                    let status = response.status().as_u16();
                    warn!(status, attempt, "Retryable HTTP status");
                    last_error = Some(BridgeError::OperationFailed(format!(
                        "HTTP {} error",
                        status
                    )));
                    retry_after(&response)
                }
                Ok(response) => return into_response(response).await,
                Err(e) => {
                    warn!(error = %e, attempt, "HTTP request failed");
                    last_error = Some(map_send_error(e));
                    None
                }
            };

            if attempt < policy.max_attempts {
                let delay = server_delay
                    .unwrap_or_else(|| policy.delay_for(attempt))
                    .min(policy.max_delay);

                debug!(delay_ms = delay.as_millis(), "Retrying after delay");
                sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            BridgeError::OperationFailed("All retry attempts exhausted".to_string())
        }))
    }
}
