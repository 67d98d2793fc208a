//! Router-level tests for the word API.
//!
//! Each test builds a fresh router backed by an in-memory store and sends
//! requests with `tower::ServiceExt::oneshot`, so no network server or
//! database is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use palinstore::features::words::{MemoryWordStore, StoreError, WordRecord, WordStore};
use palinstore::server::{AppState, build_router};

fn test_app() -> Router {
    build_router(AppState::new(Arc::new(MemoryWordStore::new())))
}

/// Store whose every operation fails with a connection-level error, for
/// exercising the storage-failure responses.
struct FailingStore;

#[async_trait]
impl WordStore for FailingStore {
    async fn create(&self, _text: &str, _palindrome: bool) -> Result<WordRecord, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn list_all(&self) -> Result<Vec<WordRecord>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn delete_by_id(&self, _id: i32) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

async fn send(app: &Router, method: &str, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn check_reports_palindrome_status() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/ispalindrome?word=Level").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": true }));

    let (status, body) = send(&app, "GET", "/ispalindrome?word=hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": false }));
}

#[tokio::test]
async fn check_treats_missing_word_as_empty() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/ispalindrome").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": true }));
}

#[tokio::test]
async fn check_is_stateless() {
    let app = test_app();

    let (_, first) = send(&app, "GET", "/ispalindrome?word=Race%20car").await;
    let (_, second) = send(&app, "GET", "/ispalindrome?word=Race%20car").await;
    assert_eq!(first, second);

    // No record was persisted by the checks.
    let (status, body) = send(&app, "GET", "/words").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "words": [] }));
}

#[tokio::test]
async fn save_then_list_round_trip() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/savepalindrome?word=Level").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Word saved successfully",
            "word": "Level",
            "palindrome": true
        })
    );

    let (status, body) = send(&app, "GET", "/words").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "words": [{ "id": 1, "word": "Level", "palindrome": true }] })
    );
}

#[tokio::test]
async fn save_preserves_original_text() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/savepalindrome?word=Race%20car").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "Race car");
    assert_eq!(body["palindrome"], true);
}

#[tokio::test]
async fn save_without_word_returns_400_and_stores_nothing() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/savepalindrome").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Word query parameter is required" }));

    let (status, body) = send(&app, "POST", "/savepalindrome?word=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Word query parameter is required" }));

    let (_, body) = send(&app, "GET", "/words").await;
    assert_eq!(body, json!({ "words": [] }));
}

#[tokio::test]
async fn delete_removes_record_from_list() {
    let app = test_app();

    send(&app, "POST", "/savepalindrome?word=Level").await;
    send(&app, "POST", "/savepalindrome?word=hello").await;

    let (status, body) = send(&app, "DELETE", "/words/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Word deleted successfully" }));

    let (_, body) = send(&app, "GET", "/words").await;
    assert_eq!(
        body,
        json!({ "words": [{ "id": 2, "word": "hello", "palindrome": false }] })
    );
}

#[tokio::test]
async fn delete_of_absent_id_is_a_successful_noop() {
    let app = test_app();

    let (status, body) = send(&app, "DELETE", "/words/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Word deleted successfully" }));
}

#[tokio::test]
async fn storage_failures_map_to_fixed_500_bodies() {
    let app = build_router(AppState::new(Arc::new(FailingStore)));

    let (status, body) = send(&app, "POST", "/savepalindrome?word=Level").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to save the word" }));

    let (status, body) = send(&app, "GET", "/words").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch words" }));

    let (status, body) = send(&app, "DELETE", "/words/1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to delete the word" }));
}

#[tokio::test]
async fn delete_with_non_numeric_id_is_rejected() {
    let app = test_app();

    let (status, _) = send(&app, "DELETE", "/words/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
