//! Integration tests for `GeminiClient` against a local fake endpoint.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use fortuna_client::{ClientConfig, Error, GeminiClient};

const ROUTE: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

/// Bind the router on an ephemeral port and return its address.
async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> GeminiClient {
    let config = ClientConfig {
        api_key: "test-key".to_string(),
        endpoint: format!("http://{addr}{ROUTE}"),
        ..ClientConfig::default()
    };
    GeminiClient::new(config).unwrap()
}

#[derive(Clone, Default)]
struct Captured {
    query: Arc<Mutex<Option<HashMap<String, String>>>>,
    body: Arc<Mutex<Option<Value>>>,
}

async fn capture_and_answer(
    State(captured): State<Captured>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    *captured.query.lock().unwrap() = Some(query);
    *captured.body.lock().unwrap() = Some(body);
    Json(json!({
        "candidates": [{"content": {"parts": [{"text": "Good fortune awaits."}]}}]
    }))
}

#[tokio::test]
async fn test_success_returns_text_verbatim() {
    let captured = Captured::default();
    let app = Router::new()
        .route(ROUTE, post(capture_and_answer))
        .with_state(captured.clone());
    let addr = serve(app).await;

    let text = client_for(addr).analyze(b"ABC").await.unwrap();
    assert_eq!(text, "Good fortune awaits.");

    // Key travels as a query parameter.
    let query = captured.query.lock().unwrap().clone().unwrap();
    assert_eq!(query.get("key").map(String::as_str), Some("test-key"));
}

#[tokio::test]
async fn test_request_body_shape() {
    let captured = Captured::default();
    let app = Router::new()
        .route(ROUTE, post(capture_and_answer))
        .with_state(captured.clone());
    let addr = serve(app).await;

    client_for(addr).analyze(b"ABC").await.unwrap();

    let body = captured.body.lock().unwrap().clone().unwrap();
    let parts = &body["contents"][0]["parts"];

    // Fixed prompt first, then the inline image.
    assert!(!parts[0]["text"].as_str().unwrap().is_empty());
    assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
    assert_eq!(parts[1]["inlineData"]["data"], "QUJD"); // base64("ABC")

    let generation = &body["generationConfig"];
    assert!((generation["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
    assert_eq!(generation["topK"], 32);
    assert!((generation["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
    assert_eq!(generation["maxOutputTokens"], 1024);
}

#[tokio::test]
async fn test_non_200_maps_to_remote_with_status() {
    let app = Router::new().route(
        ROUTE,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model overloaded") }),
    );
    let addr = serve(app).await;

    let err = client_for(addr).analyze(b"ABC").await.unwrap_err();
    match err {
        Error::Remote { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("model overloaded"));
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_status_is_preserved() {
    let app = Router::new().route(
        ROUTE,
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let addr = serve(app).await;

    let err = client_for(addr).analyze(b"ABC").await.unwrap_err();
    assert!(matches!(err, Error::Remote { status: 429, .. }));
}

#[tokio::test]
async fn test_missing_text_path_is_malformed() {
    let app = Router::new().route(
        ROUTE,
        post(|| async { Json(json!({"candidates": []})) }),
    );
    let addr = serve(app).await;

    let err = client_for(addr).analyze(b"ABC").await.unwrap_err();
    assert!(matches!(err, Error::Malformed { .. }));
}

#[tokio::test]
async fn test_invalid_json_is_malformed() {
    let app = Router::new().route(ROUTE, post(|| async { "definitely not json" }));
    let addr = serve(app).await;

    let err = client_for(addr).analyze(b"ABC").await.unwrap_err();
    assert!(matches!(err, Error::Malformed { .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport() {
    // Bind a listener to reserve a port, then drop it so nothing answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr).analyze(b"ABC").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
