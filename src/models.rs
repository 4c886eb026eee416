use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{categories, products, stock_transactions, suppliers};

pub use crate::entity::stock_transactions::TransactionType;

/// Fractional digits `price` is rendered with.
pub const PRICE_SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub quantity: i32,
    /// Category id.
    pub category: i32,
    /// Supplier id.
    pub supplier: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockTransaction {
    pub id: i32,
    pub transaction_type: TransactionType,
    pub quantity: i32,
    /// Assigned by the server when the transaction is recorded.
    pub date: DateTime<Utc>,
    /// Product id.
    pub product: i32,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<suppliers::Model> for Supplier {
    fn from(model: suppliers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            contact_email: model.contact_email,
            contact_phone: model.contact_phone,
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        let mut price = model.price;
        price.rescale(PRICE_SCALE);
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price,
            quantity: model.quantity,
            category: model.category_id,
            supplier: model.supplier_id,
        }
    }
}

impl From<stock_transactions::Model> for StockTransaction {
    fn from(model: stock_transactions::Model) -> Self {
        Self {
            id: model.id,
            transaction_type: model.transaction_type,
            quantity: model.quantity,
            date: model.date.with_timezone(&Utc),
            product: model.product_id,
        }
    }
}
