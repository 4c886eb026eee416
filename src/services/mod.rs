use sea_orm::{DatabaseConnection, EntityTrait, PrimaryKeyTrait};

use crate::{dto::FieldErrors, error::AppResult};

pub mod category_service;
pub mod product_service;
pub mod stock_transaction_service;
pub mod supplier_service;

/// Records a field error when `id` does not name an existing `E` row.
pub(crate) async fn check_reference<E>(
    db: &DatabaseConnection,
    field: &str,
    id: i32,
    errors: &mut FieldErrors,
) -> AppResult<()>
where
    E: EntityTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    if E::find_by_id(id).one(db).await?.is_none() {
        errors.add(field, format!("Invalid pk \"{id}\" - object does not exist."));
    }
    Ok(())
}
