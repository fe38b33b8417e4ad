//! Integration tests for the form.
//!
//! These drive a real `RecommendationFormController` through the HTTP client
//! against a mock recommendation service, end to end.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use form::{EntryList, RecommendationFormController, ResultView, SubmissionState, SubmitOutcome};
use recs_client::{HttpRecommendationClient, RecommendationRequest, RecommendationResponse};
use serde_json::json;
use tokio::net::TcpListener;

type Received = Arc<Mutex<Vec<RecommendationRequest>>>;

async fn start_mock_service(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock recommendation service");
    let addr = listener.local_addr().expect("Failed to get local address");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Mock recommendation service failed");
    });

    (format!("http://{}", addr), handle)
}

/// Records requests; answers with a fixed list plus a note about fuzzy matching
async fn recording_handler(
    State(received): State<Received>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    received.lock().unwrap().push(request);
    Json(
        RecommendationResponse::new(vec!["A".to_string(), "B".to_string()])
            .with_message("approx match"),
    )
}

async fn failing_handler() -> impl IntoResponse {
    (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "detail": null })))
}

fn controller_for(
    addr: String,
    titles: &[&str],
) -> RecommendationFormController<HttpRecommendationClient> {
    let client = HttpRecommendationClient::new(addr, None).expect("Failed to build client");
    let entries = EntryList::from_titles(titles.iter().copied());
    RecommendationFormController::with_entries(client, entries)
}

#[tokio::test]
async fn test_end_to_end_success() {
    let received: Received = Arc::default();
    let app = Router::new()
        .route("/recommendations", post(recording_handler))
        .with_state(Arc::clone(&received));
    let (addr, handle) = start_mock_service(app).await;

    let controller = controller_for(addr, &["Inception", ""]);
    let outcome = controller.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Applied(_)));
    assert_eq!(
        received.lock().unwrap().as_slice(),
        &[RecommendationRequest::new(vec!["Inception".to_string()])]
    );
    assert_eq!(
        controller.result(),
        ResultView::Success {
            recommendations: vec!["A".to_string(), "B".to_string()],
            message: Some("approx match".to_string()),
        }
    );
    assert_eq!(controller.state(), SubmissionState::Idle);

    handle.abort();
}

#[tokio::test]
async fn test_end_to_end_blank_form_never_calls_service() {
    let received: Received = Arc::default();
    let app = Router::new()
        .route("/recommendations", post(recording_handler))
        .with_state(Arc::clone(&received));
    let (addr, handle) = start_mock_service(app).await;

    let controller = controller_for(addr, &["", ""]);
    controller.submit().await;

    assert!(received.lock().unwrap().is_empty());
    assert_eq!(
        controller.result().error_message(),
        Some("Please enter at least one movie title")
    );

    handle.abort();
}

#[tokio::test]
async fn test_end_to_end_service_error_status() {
    let app = Router::new().route("/recommendations", post(failing_handler));
    let (addr, handle) = start_mock_service(app).await;

    let controller = controller_for(addr, &["Heat"]);
    controller.submit().await;

    assert_eq!(
        controller.result().error_message(),
        Some("Request failed with status code 503")
    );
    assert_eq!(controller.state(), SubmissionState::Idle);

    handle.abort();
}

#[tokio::test]
async fn test_form_stays_usable_after_failure() {
    // Nothing listens here, so the first submit fails to connect
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let controller = controller_for(addr, &["Heat"]);
    controller.submit().await;
    assert!(controller.result().error_message().is_some());

    controller.add_entry();
    controller.update_entry(1, "Alien").unwrap();
    controller.remove_entry(0).unwrap();

    assert_eq!(controller.entries().as_slice(), &["Alien"]);
    assert_eq!(controller.state(), SubmissionState::Idle);
}
