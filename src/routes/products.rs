use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::{FieldErrors, products::ProductPayload},
    error::AppResult,
    extract::{JsonPayload, ResourceId},
    models::Product,
    response::ErrorDetail,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products/", get(list_products).post(create_product))
        .route(
            "/api/products/{id}/",
            get(get_product)
                .put(replace_product)
                .patch(partial_update_product)
                .delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/api/products/",
    responses(
        (status = 200, description = "List products", body = Vec<Product>)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let items = product_service::list_products(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 404, description = "Product not found", body = ErrorDetail),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Product>> {
    let product = product_service::get_product(&state, id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/api/products/",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Create product", body = Product),
        (status = 400, description = "Validation failed", body = FieldErrors),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<ProductPayload>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let item = product_service::create_product(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}/",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Replaced product", body = Product),
        (status = 400, description = "Validation failed", body = FieldErrors),
        (status = 404, description = "Product not found", body = ErrorDetail),
    ),
    tag = "Products"
)]
pub async fn replace_product(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonPayload(payload): JsonPayload<ProductPayload>,
) -> AppResult<Json<Product>> {
    let item = product_service::update_product(&state, id, payload, false).await?;
    Ok(Json(item))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}/",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Validation failed", body = FieldErrors),
        (status = 404, description = "Product not found", body = ErrorDetail),
    ),
    tag = "Products"
)]
pub async fn partial_update_product(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonPayload(payload): JsonPayload<ProductPayload>,
) -> AppResult<Json<Product>> {
    let item = product_service::update_product(&state, id, payload, true).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}/",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Deleted product along with its stock transactions"),
        (status = 404, description = "Product not found", body = ErrorDetail),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    product_service::delete_product(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
