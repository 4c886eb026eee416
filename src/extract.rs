use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{dto::FieldErrors, error::AppError};

/// `Json` whose rejections are reported through [`AppError`], so malformed
/// payloads produce the same 400 body shape as failed field validation.
///
/// A body that is valid JSON but does not fit `T` is reported per field: each
/// top-level key is deserialized on its own to find which ones are wrong.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPayload<T>(pub T);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;
        match T::deserialize(&body) {
            Ok(value) => Ok(Self(value)),
            Err(err) => Err(locate_errors::<T>(&body, err).into()),
        }
    }
}

fn locate_errors<T: DeserializeOwned>(body: &Value, err: serde_json::Error) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if let Value::Object(fields) = body {
        for (name, field) in fields {
            let single = Value::Object(Map::from_iter([(name.clone(), field.clone())]));
            if let Err(field_err) = T::deserialize(&single) {
                errors.add(name.as_str(), field_err.to_string());
            }
        }
    }
    if errors.is_empty() {
        errors.add("non_field_errors", err.to_string());
    }
    errors
}

/// Resource id from the URL. An id that does not parse cannot name a record,
/// so the rejection is a 404 rather than axum's plain-text 400.
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub i32);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        Ok(Self(id))
    }
}
