use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::{FieldErrors, stock_transactions::StockTransactionPayload},
    error::AppResult,
    extract::{JsonPayload, ResourceId},
    models::StockTransaction,
    response::ErrorDetail,
    services::stock_transaction_service,
    state::AppState,
};

/// Stock movement log. Recording a transaction never changes the product's quantity,
/// and `date` is stamped server-side on creation.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/stock-transactions/",
            get(list_stock_transactions).post(create_stock_transaction),
        )
        .route(
            "/api/stock-transactions/{id}/",
            get(get_stock_transaction)
                .put(replace_stock_transaction)
                .patch(partial_update_stock_transaction)
                .delete(delete_stock_transaction),
        )
}

#[utoipa::path(
    get,
    path = "/api/stock-transactions/",
    responses(
        (status = 200, description = "List stock transactions", body = Vec<StockTransaction>)
    ),
    tag = "Stock Transactions"
)]
pub async fn list_stock_transactions(State(state): State<AppState>) -> AppResult<Json<Vec<StockTransaction>>> {
    let items = stock_transaction_service::list_stock_transactions(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/stock-transactions/{id}/",
    params(
        ("id" = i32, Path, description = "Stock transaction ID")
    ),
    responses(
        (status = 200, description = "Get stock transaction", body = StockTransaction),
        (status = 404, description = "Stock transaction not found", body = ErrorDetail),
    ),
    tag = "Stock Transactions"
)]
pub async fn get_stock_transaction(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<StockTransaction>> {
    let item = stock_transaction_service::get_stock_transaction(&state, id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/stock-transactions/",
    request_body = StockTransactionPayload,
    responses(
        (status = 201, description = "Create stock transaction", body = StockTransaction),
        (status = 400, description = "Validation failed", body = FieldErrors),
    ),
    tag = "Stock Transactions"
)]
pub async fn create_stock_transaction(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<StockTransactionPayload>,
) -> AppResult<(StatusCode, Json<StockTransaction>)> {
    let item = stock_transaction_service::create_stock_transaction(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/stock-transactions/{id}/",
    params(
        ("id" = i32, Path, description = "Stock transaction ID")
    ),
    request_body = StockTransactionPayload,
    responses(
        (status = 200, description = "Replaced stock transaction", body = StockTransaction),
        (status = 400, description = "Validation failed", body = FieldErrors),
        (status = 404, description = "Stock transaction not found", body = ErrorDetail),
    ),
    tag = "Stock Transactions"
)]
pub async fn replace_stock_transaction(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonPayload(payload): JsonPayload<StockTransactionPayload>,
) -> AppResult<Json<StockTransaction>> {
    let item = stock_transaction_service::update_stock_transaction(&state, id, payload, false).await?;
    Ok(Json(item))
}

#[utoipa::path(
    patch,
    path = "/api/stock-transactions/{id}/",
    params(
        ("id" = i32, Path, description = "Stock transaction ID")
    ),
    request_body = StockTransactionPayload,
    responses(
        (status = 200, description = "Updated stock transaction", body = StockTransaction),
        (status = 400, description = "Validation failed", body = FieldErrors),
        (status = 404, description = "Stock transaction not found", body = ErrorDetail),
    ),
    tag = "Stock Transactions"
)]
pub async fn partial_update_stock_transaction(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonPayload(payload): JsonPayload<StockTransactionPayload>,
) -> AppResult<Json<StockTransaction>> {
    let item = stock_transaction_service::update_stock_transaction(&state, id, payload, true).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/stock-transactions/{id}/",
    params(
        ("id" = i32, Path, description = "Stock transaction ID")
    ),
    responses(
        (status = 204, description = "Deleted stock transaction"),
        (status = 404, description = "Stock transaction not found", body = ErrorDetail),
    ),
    tag = "Stock Transactions"
)]
pub async fn delete_stock_transaction(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    stock_transaction_service::delete_stock_transaction(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
