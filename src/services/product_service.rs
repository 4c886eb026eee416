use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder};

use super::check_reference;
use crate::{
    dto::{FieldErrors, products::ProductPayload, validate_payload},
    entity::{
        Categories, Suppliers,
        products::{ActiveModel, Column, Entity as Products},
    },
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let items = Products::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(items)
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    let result = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Product::from);
    let result = match result {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(result)
}

pub async fn create_product(state: &AppState, payload: ProductPayload) -> AppResult<Product> {
    let mut errors = validate_payload(&payload, false);
    check_references(state, &payload, &mut errors).await?;
    errors.into_result()?;

    let mut active = ActiveModel {
        id: NotSet,
        ..Default::default()
    };
    payload.apply(&mut active);
    let product = active.insert(&state.orm).await?;

    tracing::info!(
        product_id = product.id,
        category_id = product.category_id,
        supplier_id = product.supplier_id,
        "product created"
    );
    Ok(product.into())
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: ProductPayload,
    partial: bool,
) -> AppResult<Product> {
    let existing = Products::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let mut errors = validate_payload(&payload, partial);
    check_references(state, &payload, &mut errors).await?;
    errors.into_result()?;

    let mut active: ActiveModel = existing.clone().into();
    payload.apply(&mut active);
    if !active.is_changed() {
        return Ok(existing.into());
    }
    let product = active.update(&state.orm).await?;
    Ok(product.into())
}

/// Deleting a product also removes its stock transactions.
pub async fn delete_product(state: &AppState, id: i32) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(product_id = id, "product deleted");
    Ok(())
}

async fn check_references(
    state: &AppState,
    payload: &ProductPayload,
    errors: &mut FieldErrors,
) -> AppResult<()> {
    if let Some(Some(category)) = payload.category {
        check_reference::<Categories>(&state.orm, "category", category, errors).await?;
    }
    if let Some(Some(supplier)) = payload.supplier {
        check_reference::<Suppliers>(&state.orm, "supplier", supplier, errors).await?;
    }
    Ok(())
}
