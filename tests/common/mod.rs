// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_feed::config::Config;
use activity_feed::routes::create_router;
use activity_feed::AppState;
use axum::{
    body::Body,
    http::{header, Request},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by the seeded in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default()));
    (create_router(state.clone()), state)
}

/// Create a test app with an empty store.
#[allow(dead_code)]
pub fn create_empty_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config {
        seed_data: false,
        ..Config::test_default()
    };
    let state = Arc::new(AppState::new(config));
    (create_router(state.clone()), state)
}

/// POST a GraphQL document to `/graphql` and return the decoded JSON body.
#[allow(dead_code)]
pub async fn graphql(app: &axum::Router, query: &str, variables: Value) -> Value {
    let body = serde_json::json!({ "query": query, "variables": variables });

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
