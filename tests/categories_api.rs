mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use common::{delete, get, patch, post, put};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn create_then_list_categories() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, created) = post(
        &app,
        "/api/categories/",
        json!({ "name": "Electronics", "description": "Electronic items" }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Electronics");
    assert_eq!(created["description"], "Electronic items");
    let id = created["id"].as_i64().expect("assigned id");

    let (status, listed) = get(&app, "/api/categories/").await?;
    assert_eq!(status, StatusCode::OK);
    let items = listed.as_array().expect("list body");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id);
    assert_eq!(items[0]["name"], "Electronics");
    Ok(())
}

#[tokio::test]
async fn list_is_empty_then_skips_deleted_records() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, listed) = get(&app, "/api/categories/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));

    let furniture = common::create_category(&app, "Furniture").await?;
    let garden = common::create_category(&app, "Garden").await?;
    let toys = common::create_category(&app, "Toys").await?;

    let (status, body) = delete(&app, &format!("/api/categories/{garden}/")).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (_, listed) = get(&app, "/api/categories/").await?;
    let ids: Vec<i64> = listed
        .as_array()
        .expect("list body")
        .iter()
        .filter_map(|c| c["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![furniture, toys]);
    Ok(())
}

#[tokio::test]
async fn description_is_optional() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, created) = post(&app, "/api/categories/", json!({ "name": "Misc" })).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["description"].is_null());
    Ok(())
}

#[tokio::test]
async fn missing_blank_and_long_names_are_rejected() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, errors) = post(&app, "/api/categories/", json!({ "description": "x" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(errors, json!({ "name": ["This field is required."] }));

    let (status, errors) = post(&app, "/api/categories/", json!({ "name": "   " })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(errors["name"], json!(["This field may not be blank."]));

    let long_name = "x".repeat(101);
    let (status, errors) = post(&app, "/api/categories/", json!({ "name": long_name })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors["name"],
        json!(["Ensure this field has no more than 100 characters."])
    );

    let (_, listed) = get(&app, "/api/categories/").await?;
    assert_eq!(listed, json!([]));
    Ok(())
}

#[tokio::test]
async fn wrong_field_type_is_reported_under_the_field() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, errors) = post(
        &app,
        "/api/categories/",
        json!({ "name": 42, "description": "Loose parts" }),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(errors["name"].as_array().map(Vec::len), Some(1));
    assert!(errors.get("description").is_none());
    assert!(errors.get("non_field_errors").is_none());

    let (status, errors) = post(&app, "/api/categories/", json!("Electronics")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(errors["non_field_errors"].is_array());
    Ok(())
}

#[tokio::test]
async fn null_name_is_rejected_on_create_and_patch() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, errors) = post(&app, "/api/categories/", json!({ "name": null })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(errors, json!({ "name": ["This field may not be null."] }));

    let id = common::create_category(&app, "Tools").await?;
    let uri = format!("/api/categories/{id}/");
    let (status, errors) = patch(&app, &uri, json!({ "name": null })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(errors, json!({ "name": ["This field may not be null."] }));

    let (_, fetched) = get(&app, &uri).await?;
    assert_eq!(fetched["name"], "Tools");
    Ok(())
}

#[tokio::test]
async fn names_are_trimmed_before_length_checks() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, created) = post(&app, "/api/categories/", json!({ "name": "  Garden  " })).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Garden");

    let padded = format!("  {}  ", "x".repeat(100));
    let (status, created) = post(&app, "/api/categories/", json!({ "name": padded })).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"].as_str().map(str::len), Some(100));
    Ok(())
}

#[tokio::test]
async fn non_numeric_category_id_is_not_found() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, body) = get(&app, "/api/categories/abc/").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Not found." }));

    let (status, _) = delete(&app, "/api/categories/1.5/").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/categories/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))?;
    let response = app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn retrieve_update_and_delete_unknown_category_is_not_found() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, body) = get(&app, "/api/categories/404/").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Not found." }));

    let (status, _) = put(&app, "/api/categories/404/", json!({ "name": "Ghost" })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = patch(&app, "/api/categories/404/", json!({ "name": "Ghost" })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, "/api/categories/404/").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn put_requires_every_required_field_but_patch_does_not() -> anyhow::Result<()> {
    let app = common::test_app().await?;
    let (_, created) = post(
        &app,
        "/api/categories/",
        json!({ "name": "Electronics", "description": "Electronic items" }),
    )
    .await?;
    let uri = format!("/api/categories/{}/", created["id"]);

    let (status, errors) = put(&app, &uri, json!({ "description": "Gadgets" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(errors["name"], json!(["This field is required."]));

    let (status, updated) = patch(&app, &uri, json!({ "description": "Gadgets" })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Electronics");
    assert_eq!(updated["description"], "Gadgets");

    let (status, updated) = put(&app, &uri, json!({ "name": "Consumer Electronics" })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Consumer Electronics");
    assert_eq!(updated["description"], "Gadgets");

    let (status, updated) = patch(&app, &uri, json!({ "description": null })).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["description"].is_null());

    let (_, fetched) = get(&app, &uri).await?;
    assert_eq!(fetched, updated);
    Ok(())
}

#[tokio::test]
async fn empty_patch_returns_record_unchanged() -> anyhow::Result<()> {
    let app = common::test_app().await?;
    let id = common::create_category(&app, "Tools").await?;
    let uri = format!("/api/categories/{id}/");

    let (status, body) = patch(&app, &uri, json!({})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Tools");
    Ok(())
}
