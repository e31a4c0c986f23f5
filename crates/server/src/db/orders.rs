//! Order repository for database operations.
//!
//! Order totals are query-time aggregations over order items; nothing is
//! stored redundantly. An order with no items has a total of 0.00.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use kontor_core::{CustomerId, OrderId, line_total};

use super::RepositoryError;
use crate::models::{OrderLine, OrderSummary};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type: one order with its aggregated total.
#[derive(Debug, sqlx::FromRow)]
struct OrderWithTotalRow {
    id: i32,
    order_date: DateTime<Utc>,
    shipping_address: String,
    billing_address: String,
    total_amount: Decimal,
}

impl From<OrderWithTotalRow> for OrderSummary {
    fn from(row: OrderWithTotalRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            order_date: row.order_date,
            shipping_address: row.shipping_address,
            billing_address: row.billing_address,
            total_amount: row.total_amount,
        }
    }
}

/// Internal row type: one order line joined with its product name.
#[derive(Debug, sqlx::FromRow)]
struct OrderLineRow {
    order_id: i32,
    product_name: String,
    quantity: i32,
    price: Decimal,
}

impl From<OrderLineRow> for OrderLine {
    fn from(row: OrderLineRow) -> Self {
        let total = line_total(row.quantity, row.price);
        Self {
            order_id: OrderId::new(row.order_id),
            product_name: row.product_name,
            quantity: row.quantity,
            unit_price: row.price,
            line_total: total,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a customer's orders, each with its aggregated total amount.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<OrderSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderWithTotalRow>(
            r"
            SELECT o.id, o.order_date, o.shipping_address, o.billing_address,
                   COALESCE(SUM(oi.quantity * oi.price), 0) AS total_amount
            FROM store.order o
            LEFT JOIN store.order_item oi ON oi.order_id = o.id
            WHERE o.customer_id = $1
            GROUP BY o.id
            ORDER BY o.order_date, o.id
            ",
        )
        .bind(customer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List all order lines belonging to a customer's orders, with product
    /// names, ordered by order then line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_lines_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<OrderLine>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderLineRow>(
            r"
            SELECT oi.order_id, p.name AS product_name, oi.quantity, oi.price
            FROM store.order_item oi
            JOIN store.order o ON o.id = oi.order_id
            JOIN store.product p ON p.id = oi.product_id
            WHERE o.customer_id = $1
            ORDER BY oi.order_id, oi.id
            ",
        )
        .bind(customer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
