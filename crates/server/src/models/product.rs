//! Product domain type.

use rust_decimal::Decimal;

use kontor_core::ProductId;

/// A product (domain type).
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Current list price, two decimal places.
    pub price: Decimal,
    pub category: String,
    /// Units in stock, never negative.
    pub inventory: i32,
}
