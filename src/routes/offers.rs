use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::offers::OfferPayload,
    error::{AppResult, Resource},
    middleware::{json_body::JsonBody, path_id::IdPath},
    models::Offer,
    response::Message,
    services::offer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/offers", get(list_offers).post(create_offer))
        .route(
            "/offers/{id}",
            get(get_offer).put(update_offer).delete(delete_offer),
        )
}

#[utoipa::path(
    get,
    path = "/offers",
    responses(
        (status = 200, description = "All offers", body = Vec<Offer>)
    ),
    tag = "Offers"
)]
pub async fn list_offers(State(state): State<AppState>) -> AppResult<Json<Vec<Offer>>> {
    Ok(Json(offer_service::list_offers(&state).await?))
}

#[utoipa::path(
    get,
    path = "/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Get offer", body = Offer),
        (status = 404, description = "Offer not found", body = Message),
    ),
    tag = "Offers"
)]
pub async fn get_offer(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Offer>> {
    Ok(Json(offer_service::get_offer(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/offers",
    request_body = OfferPayload,
    responses(
        (status = 201, description = "Offer created", body = Message),
        (status = 400, description = "Empty or malformed body", body = Message),
    ),
    tag = "Offers"
)]
/// Offer ids are always generated; an `id` in the body is ignored.
pub async fn create_offer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<OfferPayload>,
) -> AppResult<(StatusCode, Json<Message>)> {
    offer_service::create_offer(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(Message::created(Resource::Offer))))
}

#[utoipa::path(
    put,
    path = "/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    request_body = OfferPayload,
    responses(
        (status = 200, description = "Offer updated", body = Message),
        (status = 400, description = "Empty or malformed body", body = Message),
        (status = 404, description = "Offer not found", body = Message),
    ),
    tag = "Offers"
)]
pub async fn update_offer(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<OfferPayload>,
) -> AppResult<Json<Message>> {
    offer_service::update_offer(&state, id, payload).await?;
    Ok(Json(Message::updated(Resource::Offer)))
}

#[utoipa::path(
    delete,
    path = "/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Offer deleted", body = Message),
        (status = 404, description = "Offer not found", body = Message),
    ),
    tag = "Offers"
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Message>> {
    offer_service::delete_offer(&state, id).await?;
    Ok(Json(Message::deleted(Resource::Offer)))
}
