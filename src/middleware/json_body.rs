use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// JSON request body that must be a non-empty object.
///
/// Unlike `axum::Json` this does not insist on a `Content-Type` header, and an
/// empty body, `null` or `{}` is reported as `No data provided`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Rejected(rejection.status(), rejection.body_text()))?;
        parse_body(&bytes).map(JsonBody)
    }
}

pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> AppResult<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::NoData);
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| AppError::BadRequest(format!("Invalid JSON body: {err}")))?;

    match &value {
        Value::Null => return Err(AppError::NoData),
        Value::Object(map) if map.is_empty() => return Err(AppError::NoData),
        Value::Object(_) => {}
        _ => {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".into(),
            ));
        }
    }

    serde_json::from_value(value).map_err(|err| AppError::BadRequest(err.to_string()))
}
