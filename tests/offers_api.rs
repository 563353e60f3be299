mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{count, get, seeded_app, send, send_raw};

#[tokio::test]
async fn lists_and_fetches_offers() {
    let app = seeded_app().await;
    assert_eq!(count(&app, "/offers").await, 4);

    let (status, body) = get(&app, "/offers/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 3, "order_id": 3, "executor_id": 2 }));
}

#[tokio::test]
async fn client_supplied_id_is_ignored_on_create() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/offers",
        Some(json!({ "id": 99, "order_id": 2, "executor_id": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Offer created successfully");

    let (status, _) = get(&app, "/offers/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, created) = get(&app, "/offers/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, json!({ "id": 5, "order_id": 2, "executor_id": 2 }));
}

#[tokio::test]
async fn duplicate_offers_are_allowed() {
    let app = seeded_app().await;
    let offer = json!({ "order_id": 1, "executor_id": 2 });

    let (first, _) = send(&app, Method::POST, "/offers", Some(offer.clone())).await;
    let (second, _) = send(&app, Method::POST, "/offers", Some(offer)).await;
    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CREATED);
    assert_eq!(count(&app, "/offers").await, 6);
}

#[tokio::test]
async fn empty_body_is_rejected_without_writing() {
    let app = seeded_app().await;
    let (status, body) = send_raw(&app, Method::POST, "/offers", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No data provided");
    assert_eq!(count(&app, "/offers").await, 4);

    let (status, _) = send_raw(&app, Method::PUT, "/offers/1", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_merges_only_present_keys() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::PUT, "/offers/1", Some(json!({ "executor_id": 4 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Offer updated successfully");

    let (_, offer) = get(&app, "/offers/1").await;
    assert_eq!(offer, json!({ "id": 1, "order_id": 1, "executor_id": 4 }));
}

#[tokio::test]
async fn update_unknown_offer_is_404() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::PUT, "/offers/40", Some(json!({ "order_id": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Offer not found");
    assert_eq!(count(&app, "/offers").await, 4);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = seeded_app().await;

    let (status, _) = send(&app, Method::DELETE, "/offers/4", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = get(&app, "/offers/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Offer not found");

    let (status, _) = send(&app, Method::DELETE, "/offers/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
