use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::{FieldErrors, suppliers::SupplierPayload},
    error::AppResult,
    extract::{JsonPayload, ResourceId},
    models::Supplier,
    response::ErrorDetail,
    services::supplier_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/suppliers/", get(list_suppliers).post(create_supplier))
        .route(
            "/api/suppliers/{id}/",
            get(get_supplier)
                .put(replace_supplier)
                .patch(partial_update_supplier)
                .delete(delete_supplier),
        )
}

#[utoipa::path(
    get,
    path = "/api/suppliers/",
    responses(
        (status = 200, description = "List suppliers", body = Vec<Supplier>)
    ),
    tag = "Suppliers"
)]
pub async fn list_suppliers(State(state): State<AppState>) -> AppResult<Json<Vec<Supplier>>> {
    let items = supplier_service::list_suppliers(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/suppliers/{id}/",
    params(
        ("id" = i32, Path, description = "Supplier ID")
    ),
    responses(
        (status = 200, description = "Get supplier", body = Supplier),
        (status = 404, description = "Supplier not found", body = ErrorDetail),
    ),
    tag = "Suppliers"
)]
pub async fn get_supplier(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Supplier>> {
    let item = supplier_service::get_supplier(&state, id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/suppliers/",
    request_body = SupplierPayload,
    responses(
        (status = 201, description = "Create supplier", body = Supplier),
        (status = 400, description = "Validation failed", body = FieldErrors),
    ),
    tag = "Suppliers"
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<SupplierPayload>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    let item = supplier_service::create_supplier(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/suppliers/{id}/",
    params(
        ("id" = i32, Path, description = "Supplier ID")
    ),
    request_body = SupplierPayload,
    responses(
        (status = 200, description = "Replaced supplier", body = Supplier),
        (status = 400, description = "Validation failed", body = FieldErrors),
        (status = 404, description = "Supplier not found", body = ErrorDetail),
    ),
    tag = "Suppliers"
)]
pub async fn replace_supplier(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonPayload(payload): JsonPayload<SupplierPayload>,
) -> AppResult<Json<Supplier>> {
    let item = supplier_service::update_supplier(&state, id, payload, false).await?;
    Ok(Json(item))
}

#[utoipa::path(
    patch,
    path = "/api/suppliers/{id}/",
    params(
        ("id" = i32, Path, description = "Supplier ID")
    ),
    request_body = SupplierPayload,
    responses(
        (status = 200, description = "Updated supplier", body = Supplier),
        (status = 400, description = "Validation failed", body = FieldErrors),
        (status = 404, description = "Supplier not found", body = ErrorDetail),
    ),
    tag = "Suppliers"
)]
pub async fn partial_update_supplier(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonPayload(payload): JsonPayload<SupplierPayload>,
) -> AppResult<Json<Supplier>> {
    let item = supplier_service::update_supplier(&state, id, payload, true).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}/",
    params(
        ("id" = i32, Path, description = "Supplier ID")
    ),
    responses(
        (status = 204, description = "Deleted supplier along with its products"),
        (status = 404, description = "Supplier not found", body = ErrorDetail),
    ),
    tag = "Suppliers"
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    supplier_service::delete_supplier(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
