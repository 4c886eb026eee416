use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::{FieldErrors, categories::CategoryPayload},
    error::AppResult,
    extract::{JsonPayload, ResourceId},
    models::Category,
    response::ErrorDetail,
    services::category_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/categories/", get(list_categories).post(create_category))
        .route(
            "/api/categories/{id}/",
            get(get_category)
                .put(replace_category)
                .patch(partial_update_category)
                .delete(delete_category),
        )
}

#[utoipa::path(
    get,
    path = "/api/categories/",
    responses(
        (status = 200, description = "List categories", body = Vec<Category>)
    ),
    tag = "Categories"
)]
/// All categories, oldest first.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let items = category_service::list_categories(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}/",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Get category", body = Category),
        (status = 404, description = "Category not found", body = ErrorDetail),
    ),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Category>> {
    let item = category_service::get_category(&state, id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/categories/",
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Create category", body = Category),
        (status = 400, description = "Validation failed", body = FieldErrors),
    ),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CategoryPayload>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let item = category_service::create_category(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}/",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Replaced category", body = Category),
        (status = 400, description = "Validation failed", body = FieldErrors),
        (status = 404, description = "Category not found", body = ErrorDetail),
    ),
    tag = "Categories"
)]
pub async fn replace_category(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonPayload(payload): JsonPayload<CategoryPayload>,
) -> AppResult<Json<Category>> {
    let item = category_service::update_category(&state, id, payload, false).await?;
    Ok(Json(item))
}

#[utoipa::path(
    patch,
    path = "/api/categories/{id}/",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Updated category", body = Category),
        (status = 400, description = "Validation failed", body = FieldErrors),
        (status = 404, description = "Category not found", body = ErrorDetail),
    ),
    tag = "Categories"
)]
pub async fn partial_update_category(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonPayload(payload): JsonPayload<CategoryPayload>,
) -> AppResult<Json<Category>> {
    let item = category_service::update_category(&state, id, payload, true).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}/",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Deleted category along with its products"),
        (status = 404, description = "Category not found", body = ErrorDetail),
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    category_service::delete_category(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
