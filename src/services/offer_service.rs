use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder};

use crate::{
    dto::offers::OfferPayload,
    entity::{
        offers::{self, ActiveModel, Column, Entity as Offers},
        orders, users,
    },
    error::{AppError, AppResult, Resource},
    models::{Offer, Order, User},
    state::AppState,
};

pub async fn list_offers(state: &AppState) -> AppResult<Vec<Offer>> {
    let offers = Offers::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Offer::from)
        .collect();
    Ok(offers)
}

pub async fn get_offer(state: &AppState, id: i32) -> AppResult<Offer> {
    find_offer(state, id).await.map(Offer::from)
}

pub async fn create_offer(state: &AppState, payload: OfferPayload) -> AppResult<Offer> {
    if let Some(client_id) = payload.id {
        tracing::debug!(client_id, "ignoring client-supplied offer id");
    }

    let mut active = ActiveModel::new();
    payload.merge_into(&mut active);
    let offer = active.insert(&state.orm).await?;

    tracing::info!(offer_id = offer.id, "offer created");
    Ok(Offer::from(offer))
}

pub async fn update_offer(state: &AppState, id: i32, payload: OfferPayload) -> AppResult<Offer> {
    let existing = find_offer(state, id).await?;

    let mut active: ActiveModel = existing.clone().into();
    payload.merge_into(&mut active);
    if !active.is_changed() {
        return Ok(Offer::from(existing));
    }
    let offer = active.update(&state.orm).await?;

    tracing::info!(offer_id = offer.id, "offer updated");
    Ok(Offer::from(offer))
}

pub async fn delete_offer(state: &AppState, id: i32) -> AppResult<()> {
    let result = Offers::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(Resource::Offer));
    }

    tracing::info!(offer_id = id, "offer deleted");
    Ok(())
}

pub async fn order_of(state: &AppState, id: i32) -> AppResult<Option<Order>> {
    let offer = find_offer(state, id).await?;
    let order = offer.find_related(orders::Entity).one(&state.orm).await?;
    Ok(order.map(Order::from))
}

pub async fn executor_of(state: &AppState, id: i32) -> AppResult<Option<User>> {
    let offer = find_offer(state, id).await?;
    let executor = offer.find_related(users::Entity).one(&state.orm).await?;
    Ok(executor.map(User::from))
}

async fn find_offer(state: &AppState, id: i32) -> AppResult<offers::Model> {
    Offers::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound(Resource::Offer))
}
