use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder};

use crate::{
    dto::orders::OrderPayload,
    entity::orders::{self, ActiveModel, Column, Entity as Orders, OrderCustomer, OrderExecutor},
    error::{AppError, AppResult, Resource},
    models::{Order, User},
    state::AppState,
};

pub async fn list_orders(state: &AppState) -> AppResult<Vec<Order>> {
    let orders = Orders::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();
    Ok(orders)
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<Order> {
    find_order(state, id).await.map(Order::from)
}

/// Absent fields stay NULL.
pub async fn create_order(state: &AppState, payload: OrderPayload) -> AppResult<Order> {
    if let Some(client_id) = payload.id {
        tracing::debug!(client_id, "ignoring client-supplied order id");
    }

    let mut active = ActiveModel::new();
    payload.merge_into(&mut active);
    let order = active.insert(&state.orm).await?;

    tracing::info!(order_id = order.id, "order created");
    Ok(Order::from(order))
}

/// Partial merge: keys missing from the payload keep their stored values.
pub async fn update_order(state: &AppState, id: i32, payload: OrderPayload) -> AppResult<Order> {
    let existing = find_order(state, id).await?;

    let mut active: ActiveModel = existing.clone().into();
    payload.merge_into(&mut active);
    if !active.is_changed() {
        return Ok(Order::from(existing));
    }
    let order = active.update(&state.orm).await?;

    tracing::info!(order_id = order.id, "order updated");
    Ok(Order::from(order))
}

pub async fn delete_order(state: &AppState, id: i32) -> AppResult<()> {
    let result = Orders::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(Resource::Order));
    }

    tracing::info!(order_id = id, "order deleted");
    Ok(())
}

/// The user referenced as customer, if the reference is set and resolves.
pub async fn customer_of(state: &AppState, id: i32) -> AppResult<Option<User>> {
    let order = find_order(state, id).await?;
    let customer = order.find_linked(OrderCustomer).one(&state.orm).await?;
    Ok(customer.map(User::from))
}

/// The user referenced as executor, if the reference is set and resolves.
pub async fn executor_of(state: &AppState, id: i32) -> AppResult<Option<User>> {
    let order = find_order(state, id).await?;
    let executor = order.find_linked(OrderExecutor).one(&state.orm).await?;
    Ok(executor.map(User::from))
}

async fn find_order(state: &AppState, id: i32) -> AppResult<orders::Model> {
    Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound(Resource::Order))
}
