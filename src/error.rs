use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::response::Message;

/// The record types exposed by the API, used to word error and confirmation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Order,
    Offer,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::User => "User",
            Resource::Order => "Order",
            Resource::Offer => "Offer",
        })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(Resource),

    #[error("No data provided")]
    NoData,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("{0}")]
    BadRequest(String),

    /// A request the framework refused before it reached a handler, with the status it chose.
    #[error("{1}")]
    Rejected(StatusCode, String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Internal Server Error")]
    OrmError(#[source] DbErr),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(
                SqlErr::UniqueConstraintViolation(detail)
                | SqlErr::ForeignKeyConstraintViolation(detail),
            ) => AppError::Conflict(detail),
            _ => AppError::OrmError(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NoData | AppError::MissingField(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Rejected(status, _) => *status,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Seed(_) | AppError::OrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::OrmError(err) => tracing::error!(error = %err, "database failure"),
            other => tracing::debug!(status = %status, error = %other, "request rejected"),
        }

        (status, axum::Json(Message::new(self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
