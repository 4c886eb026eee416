use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{dto::FieldErrors, response::ErrorDetail};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found.")]
    NotFound,

    #[error("Invalid input.")]
    Validation(FieldErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                AppError::Validation(FieldErrors::single("non_field_errors", err.body_text()))
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, axum::Json(errors)).into_response()
            }
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, axum::Json(ErrorDetail::new("Not found.")))
                    .into_response()
            }
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, axum::Json(ErrorDetail::new(message))).into_response()
            }
            AppError::OrmError(ref err) => {
                tracing::error!(error = %err, "database error");
                internal_error()
            }
            AppError::Internal(ref err) => {
                tracing::error!(error = %err, "internal error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(ErrorDetail::new("Internal Server Error")),
    )
        .into_response()
}

pub type AppResult<T> = Result<T, AppError>;
