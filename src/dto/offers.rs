use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::entity::offers::ActiveModel;

#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct OfferPayload {
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<i32>)]
    pub order_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::present")]
    #[schema(value_type = Option<i32>)]
    pub executor_id: Option<Option<i32>>,
}

impl OfferPayload {
    pub fn merge_into(self, active: &mut ActiveModel) {
        if let Some(order_id) = self.order_id {
            active.order_id = Set(order_id);
        }
        if let Some(executor_id) = self.executor_id {
            active.executor_id = Set(executor_id);
        }
    }
}
