use super::*;

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode as HttpStatus, Uri},
    Router,
};
use serde_json::json;
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug, Clone)]
struct CapturedRequest {
    path: String,
    query: Option<String>,
    body: serde_json::Value,
}

#[derive(Clone)]
struct ServerState {
    reply_status: HttpStatus,
    reply_body: &'static str,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn capture(State(state): State<ServerState>, uri: Uri, body: Bytes) -> (HttpStatus, String) {
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    state.captured.lock().await.push(CapturedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body,
    });
    (state.reply_status, state.reply_body.to_string())
}

async fn spawn_server(
    reply_status: HttpStatus,
    reply_body: &'static str,
) -> (String, Arc<Mutex<Vec<CapturedRequest>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        reply_status,
        reply_body,
        captured: Arc::clone(&captured),
    };
    let app = Router::new().fallback(capture).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    (format!("http://{addr}/v1"), captured)
}

#[test]
fn method_url_joins_endpoint_model_and_method() {
    let client = GeminiClient::new(
        "https://generativelanguage.googleapis.com/v1/",
        "gemini-pro",
        "secret",
    );
    let url = client.method_url().expect("url");
    assert_eq!(
        url.as_str(),
        "https://generativelanguage.googleapis.com/v1/models/gemini-pro:generateContent"
    );
    assert!(url.query().is_none());
}

#[test]
fn method_url_rejects_garbage_endpoint() {
    let client = GeminiClient::new("not a url", "gemini-pro", "secret");
    assert!(matches!(
        client.method_url(),
        Err(ApiCallError::InvalidEndpoint { .. })
    ));
}

#[tokio::test]
async fn posts_prompt_with_key_query_parameter() {
    let (endpoint, captured) = spawn_server(
        HttpStatus::OK,
        r#"{"candidates":[{"content":{"parts":[{"text":"Read these."}]}}]}"#,
    )
    .await;
    let client = GeminiClient::new(endpoint, "gemini-pro", "test-key");

    let response = client
        .generate_content(&GenerateContentRequest::from_prompt("hello"))
        .await
        .expect("generate");
    assert_eq!(response.first_text(), Some("Read these."));

    let captured = captured.lock().await;
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].path, "/v1/models/gemini-pro:generateContent");
    assert_eq!(captured[0].query.as_deref(), Some("key=test-key"));
    assert_eq!(
        captured[0].body,
        json!({"contents": [{"parts": [{"text": "hello"}]}]})
    );
}

#[tokio::test]
async fn empty_api_key_is_sent_as_is() {
    let (endpoint, captured) = spawn_server(HttpStatus::OK, r#"{"candidates":[]}"#).await;
    let client = GeminiClient::new(endpoint, "gemini-pro", "");

    let response = client
        .generate_content(&GenerateContentRequest::from_prompt("hello"))
        .await
        .expect("generate");
    assert_eq!(response.first_text(), None);
    assert_eq!(captured.lock().await[0].query.as_deref(), Some("key="));
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let (endpoint, _captured) = spawn_server(
        HttpStatus::BAD_REQUEST,
        r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#,
    )
    .await;
    let client = GeminiClient::new(endpoint, "gemini-pro", "bad-key");

    let err = client
        .generate_content(&GenerateContentRequest::from_prompt("hello"))
        .await
        .expect_err("status error");
    match err {
        ApiCallError::Status { status, message } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(message, "INVALID_ARGUMENT: API key not valid.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn json_of_unexpected_shape_is_not_an_error() {
    for body in [
        "null",
        "[]",
        r#"{"candidates":{"oops":1}}"#,
        r#"{"candidates":[{"content":{"parts":[{"text":5}]}}]}"#,
    ] {
        let (endpoint, _captured) = spawn_server(HttpStatus::OK, body).await;
        let client = GeminiClient::new(endpoint, "gemini-pro", "key");

        let response = client
            .generate_content(&GenerateContentRequest::from_prompt("hello"))
            .await
            .unwrap_or_else(|err| panic!("body {body} failed: {err}"));
        assert_eq!(response.first_text(), None, "body: {body}");
    }
}

#[tokio::test]
async fn non_json_body_maps_to_decode_error() {
    let (endpoint, _captured) = spawn_server(HttpStatus::OK, "<html>oops</html>").await;
    let client = GeminiClient::new(endpoint, "gemini-pro", "key");

    let err = client
        .generate_content(&GenerateContentRequest::from_prompt("hello"))
        .await
        .expect_err("decode error");
    assert!(matches!(err, ApiCallError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_maps_to_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = GeminiClient::new(format!("http://{addr}/v1"), "gemini-pro", "secret-key");
    let err = client
        .generate_content(&GenerateContentRequest::from_prompt("hello"))
        .await
        .expect_err("transport error");
    assert!(matches!(err, ApiCallError::Transport(_)));
    assert!(!err.to_string().contains("secret-key"));
}

#[tokio::test]
async fn missing_api_always_fails() {
    let err = MissingGenerativeTextApi
        .generate_content(&GenerateContentRequest::from_prompt("hello"))
        .await
        .expect_err("unavailable");
    assert!(matches!(err, ApiCallError::Status { .. }));
}
