use axum::{Json, Router, http::StatusCode, http::Uri, routing::get};

use crate::{response::ErrorDetail, state::AppState};

pub mod categories;
pub mod doc;
pub mod health;
pub mod products;
pub mod root;
pub mod stock_transactions;
pub mod suppliers;

// Build the API router without binding state; it will be provided at the top level.
// Paths carry the `/api` prefix and trailing slash explicitly.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/api/", get(root::api_root))
        .merge(categories::router())
        .merge(suppliers::router())
        .merge(products::router())
        .merge(stock_transactions::router())
}

/// Full application router with state bound. Middleware layers are added by the binary.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorDetail>) {
    tracing::debug!(path = %uri.path(), "no route matched");
    (StatusCode::NOT_FOUND, Json(ErrorDetail::new("Not found.")))
}
