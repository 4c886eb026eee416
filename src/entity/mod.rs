pub mod categories;
pub mod products;
pub mod stock_transactions;
pub mod suppliers;

pub use categories::Entity as Categories;
pub use products::Entity as Products;
pub use stock_transactions::Entity as StockTransactions;
pub use suppliers::Entity as Suppliers;
