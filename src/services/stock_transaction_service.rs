use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use super::check_reference;
use crate::{
    dto::{stock_transactions::StockTransactionPayload, validate_payload},
    entity::{
        Products,
        stock_transactions::{ActiveModel, Column, Entity as StockTransactions},
    },
    error::{AppError, AppResult},
    models::StockTransaction,
    state::AppState,
};

pub async fn list_stock_transactions(state: &AppState) -> AppResult<Vec<StockTransaction>> {
    let items = StockTransactions::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(StockTransaction::from)
        .collect();
    Ok(items)
}

pub async fn get_stock_transaction(state: &AppState, id: i32) -> AppResult<StockTransaction> {
    StockTransactions::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(StockTransaction::from)
        .ok_or(AppError::NotFound)
}

/// Records a movement. The product's quantity is left untouched.
pub async fn create_stock_transaction(
    state: &AppState,
    payload: StockTransactionPayload,
) -> AppResult<StockTransaction> {
    let mut errors = validate_payload(&payload, false);
    if let Some(Some(product)) = payload.product {
        check_reference::<Products>(&state.orm, "product", product, &mut errors).await?;
    }
    errors.into_result()?;

    let mut active = ActiveModel {
        id: NotSet,
        date: Set(Utc::now().fixed_offset()),
        ..Default::default()
    };
    payload.apply(&mut active);
    let transaction = active.insert(&state.orm).await?;

    tracing::info!(
        transaction_id = transaction.id,
        product_id = transaction.product_id,
        kind = ?transaction.transaction_type,
        quantity = transaction.quantity,
        "stock transaction recorded"
    );
    Ok(transaction.into())
}

/// `date` keeps its creation value across updates.
pub async fn update_stock_transaction(
    state: &AppState,
    id: i32,
    payload: StockTransactionPayload,
    partial: bool,
) -> AppResult<StockTransaction> {
    let existing = StockTransactions::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut errors = validate_payload(&payload, partial);
    if let Some(Some(product)) = payload.product {
        check_reference::<Products>(&state.orm, "product", product, &mut errors).await?;
    }
    errors.into_result()?;

    let mut active: ActiveModel = existing.clone().into();
    payload.apply(&mut active);
    if !active.is_changed() {
        return Ok(existing.into());
    }
    let transaction = active.update(&state.orm).await?;
    Ok(transaction.into())
}

pub async fn delete_stock_transaction(state: &AppState, id: i32) -> AppResult<()> {
    let result = StockTransactions::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(transaction_id = id, "stock transaction deleted");
    Ok(())
}
