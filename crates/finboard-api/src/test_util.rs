//! Shared helpers for handler tests

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use finboard_config::Config;
use finboard_core::{Dashboard, MemoryPreferenceStore, PreferenceStoreRef, Theme, ThemeContext};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::{create_router, AppState};

/// Router over freshly seeded state, plus a handle on that state
pub fn test_app() -> (Router, AppState) {
    let mut config = Config::default();
    config.chat.reply_delay_ms = 200;

    let preferences: PreferenceStoreRef = Arc::new(MemoryPreferenceStore::new());
    let theme = ThemeContext::init(None, Theme::Dark, preferences.clone());
    let state = AppState::new(config, Dashboard::new(Utc::now()), theme, preferences);
    (create_router(state.clone()), state)
}

/// Send one request; a non-JSON body comes back as `Value::Null`
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");
    dispatch(router, request).await
}

/// Send `body` verbatim with a JSON content type
pub async fn send_raw(router: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    dispatch(router, request).await
}

async fn dispatch(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.expect("oneshot failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to collect body");

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
