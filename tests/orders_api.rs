mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{count, get, seeded_app, send, send_raw};

#[tokio::test]
async fn get_returns_scalar_fields_only() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/orders/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Walk the dog",
            "description": "Two walks a day around the park, morning and evening",
            "start_date": "02/08/2013",
            "end_date": "03/08/2055",
            "address": "4759 William Haven Apt. 194",
            "price": 5512
        })
    );
}

#[tokio::test]
async fn list_is_stable_across_calls() {
    let app = seeded_app().await;
    let (_, first) = get(&app, "/orders").await;
    let (_, second) = get(&app, "/orders").await;
    assert_eq!(first, second);
    assert_eq!(first.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn empty_bodies_are_rejected_without_writing() {
    let app = seeded_app().await;

    for raw in ["", "{}", "null"] {
        let (status, body) = send_raw(&app, Method::POST, "/orders", raw).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {raw:?}");
        assert_eq!(body, json!({ "message": "No data provided" }));
    }
    assert_eq!(count(&app, "/orders").await, 3);
}

#[tokio::test]
async fn create_sets_only_the_given_fields() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "name": "Fix the roof", "price": 9000 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Order created successfully");

    let (status, order) = get(&app, "/orders/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["name"], "Fix the roof");
    assert_eq!(order["price"], 9000);
    assert!(order["description"].is_null());
    assert!(order["address"].is_null());
}

#[tokio::test]
async fn update_of_one_field_keeps_the_others() {
    let app = seeded_app().await;
    let (_, before) = get(&app, "/orders/2").await;

    let (status, body) = send(&app, Method::PUT, "/orders/2", Some(json!({ "price": 4200 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order updated successfully");

    let (_, after) = get(&app, "/orders/2").await;
    let mut expected = before;
    expected["price"] = json!(4200);
    assert_eq!(after, expected);
}

#[tokio::test]
async fn explicit_null_clears_a_field() {
    let app = seeded_app().await;

    let (status, _) = send(&app, Method::PUT, "/orders/3", Some(json!({ "address": null }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, order) = get(&app, "/orders/3").await;
    assert!(order["address"].is_null());
    assert_eq!(order["name"], "Paint the fence");
}

#[tokio::test]
async fn update_unknown_order_is_404() {
    let app = seeded_app().await;
    let (_, before) = get(&app, "/orders").await;

    let (status, body) = send(&app, Method::PUT, "/orders/99", Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");

    let (_, after) = get(&app, "/orders").await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn unknown_fields_and_bad_types_are_rejected() {
    let app = seeded_app().await;

    let (status, _) = send(&app, Method::PUT, "/orders/1", Some(json!({ "colour": "red" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PUT, "/orders/1", Some(json!({ "price": "lots" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, order) = get(&app, "/orders/1").await;
    assert_eq!(order["price"], 5512);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::DELETE, "/orders/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order deleted successfully");

    let (status, body) = get(&app, "/orders/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");
    assert_eq!(count(&app, "/offers").await, 4);
}

#[tokio::test]
async fn malformed_ids_get_a_json_message() {
    let app = seeded_app().await;

    for (method, uri) in [
        (Method::GET, "/orders/abc"),
        (Method::DELETE, "/orders/1.5"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["message"].is_string(), "{uri} gave {body:?}");
    }

    let (status, body) = send(&app, Method::PUT, "/orders/x", Some(json!({ "price": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
    assert_eq!(count(&app, "/orders").await, 3);
}
