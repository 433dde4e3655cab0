use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use super::routes::{create_routes, AppState};
use crate::services::{MockMemberStore, MockWorkoutSessionStore};

pub fn test_app(members: MockMemberStore, workout_sessions: MockWorkoutSessionStore) -> Router {
    create_routes(AppState::from_stores(
        Arc::new(members),
        Arc::new(workout_sessions),
    ))
}

/// Send one request through the router and decode the JSON body
/// (`Value::Null` when the body is empty or not JSON).
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
