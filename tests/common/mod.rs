#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use inventory_api::{
    db::{create_orm_conn, run_migrations},
    routes::create_app,
    state::AppState,
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Fresh application over its own in-memory SQLite database.
pub async fn test_app() -> anyhow::Result<Router> {
    let orm = create_orm_conn("sqlite::memory:", 1).await?;
    run_migrations(&orm).await?;
    Ok(create_app(AppState { orm }))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::DELETE, uri, None).await
}

fn created_id(status: StatusCode, body: &Value) -> anyhow::Result<i64> {
    anyhow::ensure!(status == StatusCode::CREATED, "expected 201, got {status}: {body}");
    body["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("missing id in {body}"))
}

pub async fn create_category(app: &Router, name: &str) -> anyhow::Result<i64> {
    let (status, body) = post(app, "/api/categories/", json!({ "name": name })).await?;
    created_id(status, &body)
}

pub async fn create_supplier(app: &Router, name: &str) -> anyhow::Result<i64> {
    let (status, body) = post(
        app,
        "/api/suppliers/",
        json!({
            "name": name,
            "contact_email": "orders@supplier.example",
            "contact_phone": "555-0100",
        }),
    )
    .await?;
    created_id(status, &body)
}

pub async fn create_product(
    app: &Router,
    name: &str,
    category: i64,
    supplier: i64,
) -> anyhow::Result<i64> {
    let (status, body) = post(
        app,
        "/api/products/",
        json!({
            "name": name,
            "price": "19.99",
            "quantity": 10,
            "category": category,
            "supplier": supplier,
        }),
    )
    .await?;
    created_id(status, &body)
}

pub async fn record_transaction(
    app: &Router,
    product: i64,
    kind: &str,
    quantity: i64,
) -> anyhow::Result<i64> {
    let (status, body) = post(
        app,
        "/api/stock-transactions/",
        json!({ "product": product, "transaction_type": kind, "quantity": quantity }),
    )
    .await?;
    created_id(status, &body)
}
