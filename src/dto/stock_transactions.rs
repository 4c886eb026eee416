use sea_orm::Set;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    Payload, Presence, integer, nullable, positive_int, primary_key, validate_quantity,
    validate_transaction_type,
};
use crate::{entity::stock_transactions::ActiveModel, models::TransactionType};

/// `date` is not accepted here; it is stamped by the server on creation.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct StockTransactionPayload {
    /// Product id.
    #[serde(default, deserialize_with = "primary_key")]
    #[schema(value_type = Option<i32>)]
    pub product: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(custom(function = "validate_transaction_type"))]
    #[schema(value_type = Option<String>, example = "IN")]
    pub transaction_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "integer")]
    #[validate(custom(function = "validate_quantity"))]
    #[schema(value_type = Option<i64>, example = 10)]
    pub quantity: Option<Option<i64>>,
}

impl Payload for StockTransactionPayload {
    fn required_fields(&self) -> Vec<(&'static str, Presence)> {
        vec![
            ("product", Presence::of(&self.product)),
            ("transaction_type", Presence::of(&self.transaction_type)),
            ("quantity", Presence::of(&self.quantity)),
        ]
    }
}

impl StockTransactionPayload {
    pub fn apply(self, active: &mut ActiveModel) {
        if let Some(Some(product)) = self.product {
            active.product_id = Set(product);
        }
        if let Some(kind) = self
            .transaction_type
            .flatten()
            .as_deref()
            .and_then(TransactionType::from_code)
        {
            active.transaction_type = Set(kind);
        }
        if let Some(Some(quantity)) = self.quantity {
            active.quantity = Set(positive_int(quantity));
        }
    }
}
