use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::users::UserPayload,
    error::{AppResult, Resource},
    middleware::{json_body::JsonBody, path_id::IdPath},
    models::User,
    response::Message,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(user_service::list_users(&state).await?))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = User),
        (status = 404, description = "User not found", body = Message),
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<User>> {
    Ok(Json(user_service::get_user(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = Message),
        (status = 400, description = "Empty body or missing field", body = Message),
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> AppResult<(StatusCode, Json<Message>)> {
    user_service::create_user(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(Message::created(Resource::User))))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User replaced", body = Message),
        (status = 400, description = "Empty body or missing field", body = Message),
        (status = 404, description = "User not found", body = Message),
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<UserPayload>,
) -> AppResult<Json<Message>> {
    user_service::update_user(&state, id, payload).await?;
    Ok(Json(Message::updated(Resource::User)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = Message),
        (status = 404, description = "User not found", body = Message),
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Message>> {
    user_service::delete_user(&state, id).await?;
    Ok(Json(Message::deleted(Resource::User)))
}
