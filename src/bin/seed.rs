use std::str::FromStr;

use inventory_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{categories::CategoryPayload, products::ProductPayload, suppliers::SupplierPayload},
    entity::{Categories, Products, Suppliers, categories, products, suppliers},
    services::{category_service, product_service, supplier_service},
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.max_connections).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState { orm };

    let electronics = ensure_category(&state, "Electronics", "Electronic items").await?;
    let furniture = ensure_category(&state, "Furniture", "Household furniture").await?;
    let acme = ensure_supplier(&state, "Acme Components", "sales@acme.example", "+1-555-0100").await?;
    let oak = ensure_supplier(&state, "Oak & Pine", "orders@oakpine.example", "+1-555-0199").await?;

    let catalog = [
        ("USB-C Cable", "1m braided cable", "9.99", 120, electronics, acme),
        ("Wireless Mouse", "2.4GHz, 3 buttons", "24.50", 40, electronics, acme),
        ("Desk Lamp", "LED, adjustable arm", "39.90", 15, electronics, acme),
        ("Bookshelf", "Five shelves, oak veneer", "129.00", 6, furniture, oak),
        ("Office Chair", "Mesh back", "189.99", 0, furniture, oak),
    ];
    for (name, desc, price, quantity, category, supplier) in catalog {
        ensure_product(&state, name, desc, price, quantity, category, supplier).await?;
    }

    println!("Seed completed. Categories: {electronics}, {furniture}; suppliers: {acme}, {oak}");
    Ok(())
}

async fn ensure_category(state: &AppState, name: &str, description: &str) -> anyhow::Result<i32> {
    if let Some(existing) = Categories::find()
        .filter(categories::Column::Name.eq(name))
        .one(&state.orm)
        .await?
    {
        return Ok(existing.id);
    }
    let created = category_service::create_category(
        state,
        CategoryPayload {
            name: Some(Some(name.into())),
            description: Some(Some(description.into())),
        },
    )
    .await?;
    Ok(created.id)
}

async fn ensure_supplier(
    state: &AppState,
    name: &str,
    email: &str,
    phone: &str,
) -> anyhow::Result<i32> {
    if let Some(existing) = Suppliers::find()
        .filter(suppliers::Column::Name.eq(name))
        .one(&state.orm)
        .await?
    {
        return Ok(existing.id);
    }
    let created = supplier_service::create_supplier(
        state,
        SupplierPayload {
            name: Some(Some(name.into())),
            contact_email: Some(Some(email.into())),
            contact_phone: Some(Some(phone.into())),
        },
    )
    .await?;
    Ok(created.id)
}

async fn ensure_product(
    state: &AppState,
    name: &str,
    description: &str,
    price: &str,
    quantity: i64,
    category: i32,
    supplier: i32,
) -> anyhow::Result<()> {
    let exists = Products::find()
        .filter(products::Column::Name.eq(name))
        .one(&state.orm)
        .await?
        .is_some();
    if exists {
        return Ok(());
    }
    product_service::create_product(
        state,
        ProductPayload {
            name: Some(Some(name.into())),
            description: Some(Some(description.into())),
            price: Some(Some(Decimal::from_str(price)?)),
            quantity: Some(Some(quantity)),
            category: Some(Some(category)),
            supplier: Some(Some(supplier)),
        },
    )
    .await?;
    Ok(())
}
