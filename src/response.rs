use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Resource;

/// `{"message": "..."}` body used for confirmations and errors alike.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn created(resource: Resource) -> Self {
        Self::new(format!("{resource} created successfully"))
    }

    pub fn updated(resource: Resource) -> Self {
        Self::new(format!("{resource} updated successfully"))
    }

    pub fn deleted(resource: Resource) -> Self {
        Self::new(format!("{resource} deleted successfully"))
    }
}
