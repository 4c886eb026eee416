use rust_decimal::Decimal;
use sea_orm::Set;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    Payload, Presence, decimal, integer, not_blank, nullable, positive_int, primary_key, trimmed,
    validate_price, validate_quantity,
};
use crate::{entity::products::ActiveModel, models::PRICE_SCALE};

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct ProductPayload {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    #[schema(value_type = Option<String>, example = "USB-C Cable")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "decimal")]
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = Option<String>, example = "19.99")]
    pub price: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "integer")]
    #[validate(custom(function = "validate_quantity"))]
    #[schema(value_type = Option<i64>, example = 25)]
    pub quantity: Option<Option<i64>>,
    /// Category id.
    #[serde(default, deserialize_with = "primary_key")]
    #[schema(value_type = Option<i32>)]
    pub category: Option<Option<i32>>,
    /// Supplier id.
    #[serde(default, deserialize_with = "primary_key")]
    #[schema(value_type = Option<i32>)]
    pub supplier: Option<Option<i32>>,
}

impl Payload for ProductPayload {
    fn required_fields(&self) -> Vec<(&'static str, Presence)> {
        vec![
            ("name", Presence::of(&self.name)),
            ("price", Presence::of(&self.price)),
            ("quantity", Presence::of(&self.quantity)),
            ("category", Presence::of(&self.category)),
            ("supplier", Presence::of(&self.supplier)),
        ]
    }
}

impl ProductPayload {
    pub fn apply(self, active: &mut ActiveModel) {
        if let Some(Some(name)) = self.name {
            active.name = Set(name);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
        if let Some(Some(price)) = self.price {
            active.price = Set(price.round_dp(PRICE_SCALE));
        }
        if let Some(Some(quantity)) = self.quantity {
            active.quantity = Set(positive_int(quantity));
        }
        if let Some(Some(category)) = self.category {
            active.category_id = Set(category);
        }
        if let Some(Some(supplier)) = self.supplier {
            active.supplier_id = Set(supplier);
        }
    }
}
