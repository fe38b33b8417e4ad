//! Wire types exchanged with the recommendation service.

use serde::{Deserialize, Serialize};

/// Request body for `POST /recommendations`.
///
/// Serializes as `{ "movies": ["Inception", ...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub movies: Vec<String>,
}

impl RecommendationRequest {
    pub fn new(movies: Vec<String>) -> Self {
        Self { movies }
    }
}

/// Successful response body.
///
/// `recommendations` is required; `message` is an optional note from the
/// service (e.g. "No recommendations found. Try different movie titles.").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecommendationResponse {
    pub fn new(recommendations: Vec<String>) -> Self {
        Self {
            recommendations,
            message: None,
        }
    }

    /// Attach a message (builder pattern).
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_movies_field() {
        let request = RecommendationRequest::new(vec!["Inception".to_string(), "Heat".to_string()]);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json, serde_json::json!({ "movies": ["Inception", "Heat"] }));
    }

    #[test]
    fn test_response_message_is_optional() {
        let response: RecommendationResponse =
            serde_json::from_str(r#"{"recommendations": ["A", "B"]}"#).unwrap();

        assert_eq!(response.recommendations, vec!["A", "B"]);
        assert_eq!(response.message, None);
    }

    #[test]
    fn test_response_accepts_null_message() {
        let response: RecommendationResponse =
            serde_json::from_str(r#"{"recommendations": [], "message": null}"#).unwrap();

        assert!(response.recommendations.is_empty());
        assert_eq!(response.message, None);
    }

    #[test]
    fn test_response_requires_recommendations() {
        let result = serde_json::from_str::<RecommendationResponse>(r#"{"message": "hi"}"#);
        assert!(result.is_err(), "recommendations is a required field");
    }
}
