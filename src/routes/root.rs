use std::collections::BTreeMap;

use axum::Json;

/// Collection path of every registered resource, keyed by resource name.
pub const RESOURCES: [(&str, &str); 4] = [
    ("categories", "/api/categories/"),
    ("suppliers", "/api/suppliers/"),
    ("products", "/api/products/"),
    ("stock-transactions", "/api/stock-transactions/"),
];

#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Resource index", body = BTreeMap<String, String>),
    ),
    tag = "Root"
)]
pub async fn api_root() -> Json<BTreeMap<&'static str, &'static str>> {
    Json(RESOURCES.into_iter().collect())
}
