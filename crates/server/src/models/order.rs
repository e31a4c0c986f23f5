//! Order domain types.
//!
//! Orders are only ever read through a customer, so the domain carries an
//! order summary (with its aggregated total) and its lines rather than a bare
//! order record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use kontor_core::OrderId;

/// An order with its aggregated total amount.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    /// Unique order ID.
    pub id: OrderId,
    /// Set when the order was created; immutable afterwards.
    pub order_date: DateTime<Utc>,
    pub shipping_address: String,
    pub billing_address: String,
    /// Sum of quantity times unit price over the order's items; 0.00 for an
    /// order with no items.
    pub total_amount: Decimal,
}

/// One line of an order, joined with its product name.
#[derive(Debug, Clone)]
pub struct OrderLine {
    /// The order this line belongs to.
    pub order_id: OrderId,
    pub product_name: String,
    pub quantity: i32,
    /// Unit price captured at order time, not the product's current price.
    pub unit_price: Decimal,
    /// quantity times `unit_price`.
    pub line_total: Decimal,
}
