mod common;

use axum::http::StatusCode;
use task_board_api::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, "ok");
}

#[tokio::test]
async fn health_route_is_mounted() {
    let app = task_board_api::build_app(common::fresh_state().await);
    let (status, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unknown_paths_get_a_json_404() {
    let app = task_board_api::build_app(common::fresh_state().await);
    let (status, body) = common::get(&app, "/customers").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    let app = task_board_api::build_app(common::fresh_state().await);
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
