use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{offers, orders, users};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

/// Scalar view of an order. The customer and executor references are kept
/// out of the default serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub address: Option<String>,
    pub price: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Offer {
    pub id: i32,
    pub order_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            age: model.age,
            email: model.email,
            role: model.role,
            phone: model.phone,
        }
    }
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            start_date: model.start_date,
            end_date: model.end_date,
            address: model.address,
            price: model.price,
        }
    }
}

impl From<offers::Model> for Offer {
    fn from(model: offers::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            executor_id: model.executor_id,
        }
    }
}
