use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder};

use crate::{
    dto::{suppliers::SupplierPayload, validate_payload},
    entity::suppliers::{ActiveModel, Column, Entity as Suppliers},
    error::{AppError, AppResult},
    models::Supplier,
    state::AppState,
};

pub async fn list_suppliers(state: &AppState) -> AppResult<Vec<Supplier>> {
    let items = Suppliers::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Supplier::from)
        .collect();
    Ok(items)
}

pub async fn get_supplier(state: &AppState, id: i32) -> AppResult<Supplier> {
    Suppliers::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Supplier::from)
        .ok_or(AppError::NotFound)
}

pub async fn create_supplier(state: &AppState, payload: SupplierPayload) -> AppResult<Supplier> {
    validate_payload(&payload, false).into_result()?;

    let mut active = ActiveModel {
        id: NotSet,
        ..Default::default()
    };
    payload.apply(&mut active);
    let supplier = active.insert(&state.orm).await?;

    tracing::info!(supplier_id = supplier.id, "supplier created");
    Ok(supplier.into())
}

pub async fn update_supplier(
    state: &AppState,
    id: i32,
    payload: SupplierPayload,
    partial: bool,
) -> AppResult<Supplier> {
    let existing = Suppliers::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    validate_payload(&payload, partial).into_result()?;

    let mut active: ActiveModel = existing.clone().into();
    payload.apply(&mut active);
    if !active.is_changed() {
        return Ok(existing.into());
    }
    let supplier = active.update(&state.orm).await?;
    Ok(supplier.into())
}

pub async fn delete_supplier(state: &AppState, id: i32) -> AppResult<()> {
    let result = Suppliers::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(supplier_id = id, "supplier deleted");
    Ok(())
}
