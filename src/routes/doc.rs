use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        FieldErrors, categories::CategoryPayload, products::ProductPayload,
        stock_transactions::StockTransactionPayload, suppliers::SupplierPayload,
    },
    models::{Category, Product, StockTransaction, Supplier, TransactionType},
    response::ErrorDetail,
    routes::{categories, health, products, root, stock_transactions, suppliers},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        root::api_root,
        categories::list_categories,
        categories::create_category,
        categories::get_category,
        categories::replace_category,
        categories::partial_update_category,
        categories::delete_category,
        suppliers::list_suppliers,
        suppliers::create_supplier,
        suppliers::get_supplier,
        suppliers::replace_supplier,
        suppliers::partial_update_supplier,
        suppliers::delete_supplier,
        products::list_products,
        products::create_product,
        products::get_product,
        products::replace_product,
        products::partial_update_product,
        products::delete_product,
        stock_transactions::list_stock_transactions,
        stock_transactions::create_stock_transaction,
        stock_transactions::get_stock_transaction,
        stock_transactions::replace_stock_transaction,
        stock_transactions::partial_update_stock_transaction,
        stock_transactions::delete_stock_transaction
    ),
    components(
        schemas(
            Category,
            Supplier,
            Product,
            StockTransaction,
            TransactionType,
            CategoryPayload,
            SupplierPayload,
            ProductPayload,
            StockTransactionPayload,
            FieldErrors,
            ErrorDetail,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Root", description = "API index"),
        (name = "Categories", description = "Product category endpoints"),
        (name = "Suppliers", description = "Supplier endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Stock Transactions", description = "Stock movement log endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
