use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::entity::orders::ActiveModel;

#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct OrderPayload {
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<String>)]
    pub start_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<String>)]
    pub end_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<i64>)]
    pub price: Option<Option<i64>>,
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<i32>)]
    pub customer_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<i32>)]
    pub executor_id: Option<Option<i32>>,
}

impl OrderPayload {
    /// Copy the keys present in the payload onto `active`, leaving the rest untouched.
    pub fn merge_into(self, active: &mut ActiveModel) {
        if let Some(name) = self.name {
            active.name = Set(name);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
        if let Some(start_date) = self.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = self.end_date {
            active.end_date = Set(end_date);
        }
        if let Some(address) = self.address {
            active.address = Set(address);
        }
        if let Some(price) = self.price {
            active.price = Set(price);
        }
        if let Some(customer_id) = self.customer_id {
            active.customer_id = Set(customer_id);
        }
        if let Some(executor_id) = self.executor_id {
            active.executor_id = Set(executor_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ActiveModelBehavior, ActiveValue};

    use super::*;
    use crate::middleware::json_body::parse_body;

    #[test]
    fn only_present_keys_are_set() {
        let payload: OrderPayload = parse_body(br#"{"price": 1500}"#).unwrap();
        let mut active = ActiveModel::new();
        payload.merge_into(&mut active);

        assert!(matches!(active.price, ActiveValue::Set(Some(1500))));
        assert!(active.name.is_not_set());
        assert!(active.customer_id.is_not_set());
    }

    #[test]
    fn explicit_null_clears() {
        let payload: OrderPayload = parse_body(br#"{"address": null}"#).unwrap();
        assert_eq!(payload.address, Some(None));
        assert_eq!(payload.name, None);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(parse_body::<OrderPayload>(br#"{"price": "cheap"}"#).is_err());
    }
}
