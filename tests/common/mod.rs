#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use task_board_api::{build_app, config::AppConfig, seed, state::AppState};
use tower::ServiceExt;

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub async fn fresh_state() -> AppState {
    AppState::connect(&AppConfig::in_memory())
        .await
        .expect("in-memory state")
}

pub async fn seeded_state() -> AppState {
    let state = fresh_state().await;
    seed::load_all(&state.orm, &fixtures_dir())
        .await
        .expect("default fixtures load");
    state
}

pub async fn seeded_app() -> Router {
    build_app(seeded_state().await)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let raw = body.map(|value| value.to_string()).unwrap_or_default();
    send_raw(app, method, uri, &raw).await
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if !raw.is_empty() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder.body(Body::from(raw.to_owned())).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn count(app: &Router, uri: &str) -> usize {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().expect("list body").len()
}
