use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder};

use crate::{
    dto::{categories::CategoryPayload, validate_payload},
    entity::categories::{ActiveModel, Column, Entity as Categories},
    error::{AppError, AppResult},
    models::Category,
    state::AppState,
};

pub async fn list_categories(state: &AppState) -> AppResult<Vec<Category>> {
    let items = Categories::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();
    Ok(items)
}

pub async fn get_category(state: &AppState, id: i32) -> AppResult<Category> {
    let result = Categories::find_by_id(id).one(&state.orm).await?;
    match result {
        Some(category) => Ok(category.into()),
        None => Err(AppError::NotFound),
    }
}

pub async fn create_category(state: &AppState, payload: CategoryPayload) -> AppResult<Category> {
    validate_payload(&payload, false).into_result()?;

    let mut active = ActiveModel {
        id: NotSet,
        ..Default::default()
    };
    payload.apply(&mut active);
    let category = active.insert(&state.orm).await?;

    tracing::info!(category_id = category.id, "category created");
    Ok(category.into())
}

/// Full (`partial == false`) or partial update of an existing category.
pub async fn update_category(
    state: &AppState,
    id: i32,
    payload: CategoryPayload,
    partial: bool,
) -> AppResult<Category> {
    let existing = Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    validate_payload(&payload, partial).into_result()?;

    let mut active: ActiveModel = existing.clone().into();
    payload.apply(&mut active);
    if !active.is_changed() {
        return Ok(existing.into());
    }
    let category = active.update(&state.orm).await?;
    Ok(category.into())
}

/// Deleting a category also removes its products and their stock transactions.
pub async fn delete_category(state: &AppState, id: i32) -> AppResult<()> {
    let result = Categories::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(category_id = id, "category deleted");
    Ok(())
}
