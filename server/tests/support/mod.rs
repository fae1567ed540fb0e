#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use cookbook_core::recommend::FallbackStrategy;
use cookbook_core::{RecipeService, RecommendationStrategy};
use cookbook_server::db;
use cookbook_server::store::DieselStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// App over a fresh in-memory database and the given strategy.
pub fn test_app_with(strategy: Arc<dyn RecommendationStrategy>) -> Router {
    let pool = db::create_pool(":memory:").expect("Failed to create test database");
    let store = Arc::new(DieselStore::new(pool));
    cookbook_server::app(Arc::new(RecipeService::with_strategy(store, strategy)))
}

pub fn test_app() -> Router {
    test_app_with(Arc::new(FallbackStrategy))
}

/// Send a request and decode the JSON body (`Value::Null` when empty).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Run a GraphQL operation and return the full response body.
pub async fn graphql(app: &Router, query: &str, variables: Option<Value>) -> Value {
    let mut payload = json!({ "query": query });
    if let Some(variables) = variables {
        payload["variables"] = variables;
    }

    let (status, body) = send(app, "POST", "/graphql", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    body
}

pub async fn create_recipe(app: &Router, title: &str) -> Value {
    let (status, body) = send(app, "POST", "/api/recipes", Some(json!({ "title": title }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}
