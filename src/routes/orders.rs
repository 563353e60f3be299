use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::orders::OrderPayload,
    error::{AppResult, Resource},
    middleware::{json_body::JsonBody, path_id::IdPath},
    models::Order,
    response::Message,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
}

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = Vec<Order>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(order_service::list_orders(&state).await?))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Get order", body = Order),
        (status = 404, description = "Order not found", body = Message),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Order>> {
    Ok(Json(order_service::get_order(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderPayload,
    responses(
        (status = 201, description = "Order created", body = Message),
        (status = 400, description = "Empty or malformed body", body = Message),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<OrderPayload>,
) -> AppResult<(StatusCode, Json<Message>)> {
    order_service::create_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(Message::created(Resource::Order))))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Order updated", body = Message),
        (status = 400, description = "Empty or malformed body", body = Message),
        (status = 404, description = "Order not found", body = Message),
    ),
    tag = "Orders"
)]
/// Only the keys present in the body are applied.
pub async fn update_order(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<OrderPayload>,
) -> AppResult<Json<Message>> {
    order_service::update_order(&state, id, payload).await?;
    Ok(Json(Message::updated(Resource::Order)))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order deleted", body = Message),
        (status = 404, description = "Order not found", body = Message),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Message>> {
    order_service::delete_order(&state, id).await?;
    Ok(Json(Message::deleted(Resource::Order)))
}
