//! Recommendations through the HTTP surface with the AI strategy wired in.

mod support;

use axum::http::StatusCode;
use cookbook_core::llm::{ClaudeProvider, FakeProvider, LlmError};
use cookbook_core::recommend::AiStrategy;
use std::sync::Arc;
use std::time::Duration;
use support::{create_recipe, send, test_app_with};

fn ai_app(provider: FakeProvider) -> axum::Router {
    test_app_with(Arc::new(AiStrategy::new(Arc::new(provider))))
}

#[tokio::test]
async fn test_ai_choice_is_returned() {
    let app = ai_app(FakeProvider::with_response(
        "soup",
        r#"{"recommended_id": 1, "title": "Soup", "reason": "Comforting on a cold day"}"#,
    ));
    create_recipe(&app, "Soup").await;
    create_recipe(&app, "Pizza").await;

    let (status, rec) = send(&app, "GET", "/api/recipes/recommendation", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rec["recommended_id"], 1);
    assert_eq!(rec["title"], "Soup");
    assert_eq!(rec["reason"], "Comforting on a cold day");
}

#[tokio::test]
async fn test_provider_failure_never_fails_the_request() {
    let app = ai_app(FakeProvider::failing(LlmError::ApiError {
        status: 529,
        message: "overloaded".to_string(),
    }));
    create_recipe(&app, "Soup").await;
    let pizza = create_recipe(&app, "Pizza").await;

    let (status, rec) = send(&app, "GET", "/api/recipes/recommendation", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rec["recommended_id"], pizza["id"]);
    assert_eq!(rec["title"], "Pizza");
    assert!(rec["reason"].as_str().unwrap().contains("fallback"));
}

#[tokio::test]
async fn test_garbage_reply_falls_back() {
    let app = ai_app(FakeProvider::new().with_default_response("Sorry, I can't help with that."));
    let pizza = create_recipe(&app, "Pizza").await;

    let (_, rec) = send(&app, "GET", "/api/recipes/recommendation", None).await;
    assert_eq!(rec["recommended_id"], pizza["id"]);
    assert_eq!(rec["title"], "Pizza");
}

#[tokio::test]
async fn test_unreachable_claude_falls_back() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = ClaudeProvider::new("sk-test".to_string(), "claude-test".to_string())
        .with_base_url(format!("http://{}", addr))
        .with_timeout(Duration::from_secs(2));
    let app = test_app_with(Arc::new(AiStrategy::new(Arc::new(provider))));
    let recipe = create_recipe(&app, "Stew").await;

    let (status, rec) = send(&app, "GET", "/api/recipes/recommendation", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rec["recommended_id"], recipe["id"]);
    assert_eq!(rec["title"], "Stew");
}

#[tokio::test]
async fn test_ai_empty_catalog() {
    let app = ai_app(FakeProvider::new());

    let (status, rec) = send(&app, "GET", "/api/recipes/recommendation", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(rec["recommended_id"].is_null());
    assert_eq!(rec["title"], "No recipes yet");
}
