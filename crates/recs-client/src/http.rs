//! HTTP implementation of [`RecommendationService`].
//!
//! Talks JSON over `POST {base_url}/recommendations`. Any non-success status,
//! network failure, timeout or unreadable body becomes a [`ServiceError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info};

use crate::RecommendationService;
use crate::error::ServiceError;
use crate::types::{RecommendationRequest, RecommendationResponse};

/// Where the recommendation service listens unless told otherwise.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Endpoint path, relative to the base URL.
pub const RECOMMENDATIONS_PATH: &str = "/recommendations";

/// Client for the recommendation service over HTTP.
///
/// Cheap to clone: `reqwest::Client` is reference counted internally.
#[derive(Debug, Clone)]
pub struct HttpRecommendationClient {
    client: Client,
    base_url: String,
}

impl HttpRecommendationClient {
    /// Build a client for the service at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - Scheme, host and port (e.g., "http://localhost:8000")
    /// * `timeout` - Per-request timeout; `None` waits indefinitely
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ServiceError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Configuration(e.to_string()))?;

        info!("Recommendation client targeting {}", base_url);
        Ok(Self { client, base_url })
    }

    /// Get the base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, RECOMMENDATIONS_PATH)
    }
}

#[async_trait]
impl RecommendationService for HttpRecommendationClient {
    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResponse, ServiceError> {
        let url = self.endpoint();
        debug!("POST {} with {} movies", url, request.movies.len());

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Error sending recommendation request: {}", e);
                transport_error(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            error!("Error reading recommendation response body: {}", e);
            transport_error(e)
        })?;

        if !status.is_success() {
            let detail = extract_detail(&body);
            error!(
                "Recommendation service returned {} (detail: {:?})",
                status, detail
            );
            return Err(ServiceError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: RecommendationResponse = serde_json::from_slice(&body).map_err(|e| {
            error!("Malformed recommendation response: {}", e);
            ServiceError::InvalidResponse(e.to_string())
        })?;

        debug!(
            "Received {} recommendations (message: {:?})",
            parsed.recommendations.len(),
            parsed.message
        );
        Ok(parsed)
    }
}

fn transport_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout
    } else {
        ServiceError::Connection(err.to_string())
    }
}

/// Pull a human-readable explanation out of an error body.
///
/// Understands `{ "detail": "..." }`; a non-string `detail` (such as a list
/// of validation problems) is rendered as compact JSON.
fn extract_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
