//! One-time population of the store from JSON fixtures.
//!
//! Fixtures live in a single directory as `users.json`, `orders.json` and
//! `offers.json`, each holding an array of records whose keys match the
//! entity's fields. Users load first because orders and offers point at them.

use std::path::Path;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, TransactionTrait,
};
use serde::de::DeserializeOwned;

use crate::{
    dto::{offers::OfferPayload, orders::OrderPayload, users::UserPayload},
    entity::{offers, orders, users},
    error::{AppError, AppResult},
};

pub const USERS_FILE: &str = "users.json";
pub const ORDERS_FILE: &str = "orders.json";
pub const OFFERS_FILE: &str = "offers.json";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub orders: usize,
    pub offers: usize,
}

/// Load all three fixtures inside one transaction.
///
/// Any unreadable or malformed fixture, or a record the store rejects, rolls
/// the whole load back.
pub async fn load_all(conn: &DatabaseConnection, dir: &Path) -> AppResult<SeedReport> {
    // Read and parse everything up front so a broken file never opens a transaction.
    let user_records: Vec<UserPayload> = read_fixture(dir, USERS_FILE).await?;
    let order_records: Vec<OrderPayload> = read_fixture(dir, ORDERS_FILE).await?;
    let offer_records: Vec<OfferPayload> = read_fixture(dir, OFFERS_FILE).await?;

    let txn = conn.begin().await?;
    let report = SeedReport {
        users: insert_users(&txn, user_records).await?,
        orders: insert_orders(&txn, order_records).await?,
        offers: insert_offers(&txn, offer_records).await?,
    };
    txn.commit().await?;

    tracing::info!(
        users = report.users,
        orders = report.orders,
        offers = report.offers,
        dir = %dir.display(),
        "seed data loaded"
    );
    Ok(report)
}

/// A store that already holds users is treated as seeded.
pub async fn is_seeded(conn: &DatabaseConnection) -> AppResult<bool> {
    Ok(users::Entity::find().count(conn).await? > 0)
}

async fn read_fixture<T: DeserializeOwned>(dir: &Path, file: &str) -> AppResult<Vec<T>> {
    let path = dir.join(file);
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| AppError::Seed(format!("cannot read {}: {err}", path.display())))?;
    let records: Vec<T> = serde_json::from_str(&raw)
        .map_err(|err| AppError::Seed(format!("malformed {}: {err}", path.display())))?;

    tracing::debug!(file, records = records.len(), "fixture parsed");
    Ok(records)
}

async fn insert_users<C: ConnectionTrait>(conn: &C, records: Vec<UserPayload>) -> AppResult<usize> {
    let count = records.len();
    for (index, record) in records.into_iter().enumerate() {
        let id = record.id;
        let fields = record.require().map_err(|err| {
            AppError::Seed(format!("{USERS_FILE} record {index}: {err}"))
        })?;

        let mut active = users::ActiveModel::new();
        if let Some(id) = id {
            active.id = Set(id);
        }
        fields.apply(&mut active);
        active.insert(conn).await?;
    }
    Ok(count)
}

async fn insert_orders<C: ConnectionTrait>(
    conn: &C,
    records: Vec<OrderPayload>,
) -> AppResult<usize> {
    let count = records.len();
    for record in records {
        let mut active = orders::ActiveModel::new();
        if let Some(id) = record.id {
            active.id = Set(id);
        }
        record.merge_into(&mut active);
        active.insert(conn).await?;
    }
    Ok(count)
}

async fn insert_offers<C: ConnectionTrait>(
    conn: &C,
    records: Vec<OfferPayload>,
) -> AppResult<usize> {
    let count = records.len();
    for record in records {
        let mut active = offers::ActiveModel::new();
        if let Some(id) = record.id {
            active.id = Set(id);
        }
        record.merge_into(&mut active);
        active.insert(conn).await?;
    }
    Ok(count)
}
