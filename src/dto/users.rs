use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    entity::users::ActiveModel,
    error::{AppError, AppResult},
};

#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// A user payload that passed the full-replace check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

impl UserPayload {
    /// Fails with `MissingField` naming the first absent field.
    pub fn require(self) -> AppResult<UserFields> {
        Ok(UserFields {
            first_name: self.first_name.ok_or(AppError::MissingField("first_name"))?,
            last_name: self.last_name.ok_or(AppError::MissingField("last_name"))?,
            age: self.age.ok_or(AppError::MissingField("age"))?,
            email: self.email.ok_or(AppError::MissingField("email"))?,
            role: self.role.ok_or(AppError::MissingField("role"))?,
            phone: self.phone.ok_or(AppError::MissingField("phone"))?,
        })
    }
}

impl UserFields {
    pub fn apply(self, active: &mut ActiveModel) {
        active.first_name = Set(self.first_name);
        active.last_name = Set(self.last_name);
        active.age = Set(self.age);
        active.email = Set(self.email);
        active.role = Set(self.role);
        active.phone = Set(self.phone);
    }
}
