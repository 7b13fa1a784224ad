//! End-to-end tests of live mode against a stub completions endpoint.

mod common;

use axum::http::StatusCode;
use common::{live_config, StubUpstream, TestApp};
use relay_service::services::SYSTEM_PROMPT;
use serde_json::json;

#[tokio::test]
async fn returns_trimmed_completion_text() {
    let upstream =
        StubUpstream::completing_with("\n  {\"title\":\"Survey\",\"fields\":[]}  \n").await;
    let app = TestApp::spawn(live_config(&upstream.base_url)).await;

    let response = app.post_chat(&json!({"message": "Make a survey"})).await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"response": "{\"title\":\"Survey\",\"fields\":[]}", "success": true})
    );
}

#[tokio::test]
async fn forwards_messages_and_fixed_parameters() {
    let upstream = StubUpstream::completing_with("{}").await;
    let app = TestApp::spawn(live_config(&upstream.base_url)).await;

    app.post_chat(&json!({
        "message": "Now add an email field",
        "history": [
            {"role": "user", "content": "Make a newsletter form"},
            {"role": "assistant", "content": "{\"title\":\"Newsletter\",\"fields\":[]}"}
        ]
    }))
    .await;

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);

    let captured = &requests[0];
    assert_eq!(captured.authorization.as_deref(), Some("Bearer sk-test-key"));
    assert_eq!(captured.body["model"], "gpt-3.5-turbo");
    assert_eq!(captured.body["max_tokens"], 1500);
    assert!((captured.body["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    assert_eq!(
        captured.body["messages"],
        json!([
            {"role": "system", "content": SYSTEM_PROMPT},
            {"role": "user", "content": "Make a newsletter form"},
            {"role": "assistant", "content": "{\"title\":\"Newsletter\",\"fields\":[]}"},
            {"role": "user", "content": "Now add an email field"}
        ])
    );
}

#[tokio::test]
async fn mock_mode_never_contacts_upstream() {
    let upstream = StubUpstream::completing_with("{}").await;
    let config = relay_service::config::OpenAiConfig {
        base_url: upstream.base_url.clone(),
        ..relay_service::config::OpenAiConfig::default()
    };
    let app = TestApp::spawn(config).await;

    let response = app.post_chat(&json!({"message": "anything"})).await;
    assert!(response.status().is_success());
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn upstream_error_is_surfaced() {
    let upstream = StubUpstream::spawn(
        StatusCode::UNAUTHORIZED,
        json!({"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}),
    )
    .await;
    let app = TestApp::spawn(live_config(&upstream.base_url)).await;

    let response = app.post_chat(&json!({"message": "hi"})).await;
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("401"), "unexpected error: {error}");
    assert!(error.contains("Incorrect API key provided"), "unexpected error: {error}");
}

#[tokio::test]
async fn rate_limit_is_surfaced() {
    let upstream = StubUpstream::spawn(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "Rate limit reached"}}),
    )
    .await;
    let app = TestApp::spawn(live_config(&upstream.base_url)).await;

    let body: serde_json::Value = app
        .post_chat(&json!({"message": "hi"}))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Rate limited: Rate limit reached");
}

#[tokio::test]
async fn empty_choices_is_an_upstream_failure() {
    let upstream = StubUpstream::spawn(StatusCode::OK, json!({"choices": []})).await;
    let app = TestApp::spawn(live_config(&upstream.base_url)).await;

    let response = app.post_chat(&json!({"message": "hi"})).await;
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid response: response contained no choices");
}

#[tokio::test]
async fn unreachable_upstream_is_a_network_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let app = TestApp::spawn(live_config(&format!("http://127.0.0.1:{}/v1", port))).await;

    let response = app.post_chat(&json!({"message": "hi"})).await;
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Network error:"));
}
