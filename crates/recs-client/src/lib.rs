//! Client for the remote movie recommendation service.
//!
//! This crate provides the Rust side of the conversation with the
//! recommendation service. It handles:
//! - The wire types (`{ "movies": [...] }` in, `{ "recommendations": [...] }` out)
//! - The [`RecommendationService`] trait that callers program against
//! - An HTTP implementation of that trait built on `reqwest`
//! - Mapping transport failures into a typed [`ServiceError`]
//!
//! ## Example Usage
//!
//! ```ignore
//! use recs_client::{HttpRecommendationClient, RecommendationRequest, RecommendationService};
//!
//! let client = HttpRecommendationClient::new("http://localhost:8000", None)?;
//! let response = client
//!     .recommend(RecommendationRequest::new(vec!["Inception".to_string()]))
//!     .await?;
//!
//! for title in &response.recommendations {
//!     println!("{}", title);
//! }
//! ```

pub mod error;
pub mod http;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;

pub use error::ServiceError;
pub use http::{DEFAULT_SERVICE_URL, HttpRecommendationClient, RECOMMENDATIONS_PATH};
pub use types::{RecommendationRequest, RecommendationResponse};

/// The remote recommendation service, as seen by the client.
///
/// The recommendation algorithm itself lives behind this trait and is opaque
/// to us. Implementations must be `Send + Sync` so that one service can back
/// several concurrent submissions.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Ask the service for recommendations based on `request.movies`.
    ///
    /// Issues exactly one call. No retries.
    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResponse, ServiceError>;
}

/// Lets one service be shared between several owners.
#[async_trait]
impl<T: RecommendationService + ?Sized> RecommendationService for Arc<T> {
    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResponse, ServiceError> {
        (**self).recommend(request).await
    }
}
