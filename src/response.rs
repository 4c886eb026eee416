use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-validation error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
