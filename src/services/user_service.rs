use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder};

use crate::{
    dto::users::UserPayload,
    entity::{
        orders,
        users::{self, ActiveModel, Column, CustomerOrders, Entity as Users, ExecutorOrders},
    },
    error::{AppError, AppResult, Resource},
    models::{Order, User},
    state::AppState,
};

pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let users = Users::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();
    Ok(users)
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<User> {
    find_user(state, id).await.map(User::from)
}

pub async fn create_user(state: &AppState, payload: UserPayload) -> AppResult<User> {
    if let Some(client_id) = payload.id {
        tracing::debug!(client_id, "ignoring client-supplied user id");
    }
    let fields = payload.require()?;

    let mut active = ActiveModel::new();
    fields.apply(&mut active);
    let user = active.insert(&state.orm).await?;

    tracing::info!(user_id = user.id, "user created");
    Ok(User::from(user))
}

/// Full replace: all six fields are required, otherwise nothing is written.
pub async fn update_user(state: &AppState, id: i32, payload: UserPayload) -> AppResult<User> {
    let existing = find_user(state, id).await?;
    let fields = payload.require()?;

    let mut active: ActiveModel = existing.into();
    fields.apply(&mut active);
    let user = active.update(&state.orm).await?;

    tracing::info!(user_id = user.id, "user updated");
    Ok(User::from(user))
}

/// Orders and offers that reference the user are left in place.
pub async fn delete_user(state: &AppState, id: i32) -> AppResult<()> {
    let result = Users::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(Resource::User));
    }

    tracing::info!(user_id = id, "user deleted");
    Ok(())
}

pub async fn orders_as_customer(state: &AppState, id: i32) -> AppResult<Vec<Order>> {
    let user = find_user(state, id).await?;
    let rows = user
        .find_linked(CustomerOrders)
        .order_by_asc(orders::Column::Id)
        .all(&state.orm)
        .await?;
    Ok(rows.into_iter().map(Order::from).collect())
}

pub async fn orders_as_executor(state: &AppState, id: i32) -> AppResult<Vec<Order>> {
    let user = find_user(state, id).await?;
    let rows = user
        .find_linked(ExecutorOrders)
        .order_by_asc(orders::Column::Id)
        .all(&state.orm)
        .await?;
    Ok(rows.into_iter().map(Order::from).collect())
}

async fn find_user(state: &AppState, id: i32) -> AppResult<users::Model> {
    Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound(Resource::User))
}
