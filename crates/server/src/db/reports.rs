//! Aggregate report queries.
//!
//! The four read-only reports over the store schema. Each query returns an
//! ordered sequence of flat rows that templates consume as-is.
//!
//! Contracts shared by all reports:
//! - "no matching rows" aggregates to zero (`COALESCE` over outer joins),
//!   never to a dropped row
//! - monetary sums stay in NUMERIC/`Decimal` end to end
//! - tie-breaks order by entity id for stable output

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::RepositoryError;

/// Spending threshold for the high-spenders report.
///
/// Fixed business constant; comparison is strict, so a customer whose total
/// is exactly this amount is excluded.
#[must_use]
pub fn high_spend_threshold() -> Decimal {
    Decimal::new(40, 0)
}

// =============================================================================
// Report Row Types
// =============================================================================

/// One row of the customers-with-orders report.
#[derive(Debug, sqlx::FromRow)]
pub struct CustomerWithOrdersRow {
    pub first_name: String,
    pub last_name: String,
}

/// One row of the customer-revenue report.
#[derive(Debug, sqlx::FromRow)]
pub struct CustomerRevenueRow {
    pub first_name: String,
    pub last_name: String,
    pub total_orders: i64,
    pub total_revenue: Decimal,
}

/// One row of the best-selling-products report.
#[derive(Debug, sqlx::FromRow)]
pub struct BestSellingProductRow {
    pub product_id: i32,
    pub product_name: String,
    pub order_count: i64,
    pub total_quantity: i64,
    pub customers: String,
}

/// One row of the high-spending-customers report.
#[derive(Debug, sqlx::FromRow)]
pub struct HighSpendingCustomerRow {
    pub full_name: String,
    pub total_spent: Decimal,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for the aggregate reports.
pub struct ReportRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReportRepository<'a> {
    /// Create a new report repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Distinct (first name, last name) pairs of customers that placed at
    /// least one order. Inner join: customers without orders never appear;
    /// customers with several orders collapse to one row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn customers_with_orders(
        &self,
    ) -> Result<Vec<CustomerWithOrdersRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, CustomerWithOrdersRow>(
            r"
            SELECT DISTINCT c.first_name, c.last_name
            FROM store.customer c
            JOIN store.order o ON o.customer_id = c.id
            ORDER BY c.last_name, c.first_name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Order count and revenue for every customer, including those with zero
    /// orders (outer joins, sums coalesced to zero).
    ///
    /// Orders are counted distinct: the item join multiplies order rows, and
    /// a plain COUNT would report one order per line item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn customer_revenue(&self) -> Result<Vec<CustomerRevenueRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, CustomerRevenueRow>(
            r"
            SELECT c.first_name, c.last_name,
                   COUNT(DISTINCT o.id) AS total_orders,
                   COALESCE(SUM(oi.quantity * oi.price), 0) AS total_revenue
            FROM store.customer c
            LEFT JOIN store.order o ON o.customer_id = c.id
            LEFT JOIN store.order_item oi ON oi.order_id = o.id
            GROUP BY c.id
            ORDER BY c.id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Products ordered at least once, with how many distinct orders and
    /// units they appear in and which customers bought them, most-ordered
    /// first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn best_selling_products(
        &self,
    ) -> Result<Vec<BestSellingProductRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, BestSellingProductRow>(
            r"
            SELECT p.id AS product_id,
                   p.name AS product_name,
                   COUNT(DISTINCT oi.order_id) AS order_count,
                   SUM(oi.quantity) AS total_quantity,
                   STRING_AGG(DISTINCT c.first_name || ' ' || c.last_name, ', '
                              ORDER BY c.first_name || ' ' || c.last_name) AS customers
            FROM store.product p
            JOIN store.order_item oi ON oi.product_id = p.id
            JOIN store.order o ON o.id = oi.order_id
            JOIN store.customer c ON c.id = o.customer_id
            GROUP BY p.id, p.name
            ORDER BY order_count DESC, p.id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Customers whose lifetime spend strictly exceeds the threshold,
    /// biggest spenders first.
    ///
    /// Postgres cannot reference the output alias in HAVING, so the
    /// aggregate expression is repeated there.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn high_spending_customers(
        &self,
    ) -> Result<Vec<HighSpendingCustomerRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, HighSpendingCustomerRow>(
            r"
            SELECT c.first_name || ' ' || c.last_name AS full_name,
                   COALESCE(SUM(oi.quantity * oi.price), 0) AS total_spent
            FROM store.customer c
            LEFT JOIN store.order o ON o.customer_id = c.id
            LEFT JOIN store.order_item oi ON oi.order_id = o.id
            GROUP BY c.id
            HAVING COALESCE(SUM(oi.quantity * oi.price), 0) > $1
            ORDER BY total_spent DESC, c.id
            ",
        )
        .bind(high_spend_threshold())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kontor_core::{line_total, order_total};

    fn dec(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    #[test]
    fn test_threshold_is_forty() {
        assert_eq!(high_spend_threshold(), dec(40, 0));
    }

    #[test]
    fn test_threshold_comparison_is_strict() {
        // One order: qty 3 @ 10.00 plus qty 1 @ 5.00 = 35.00, below threshold
        let anna = order_total([line_total(3, dec(1000, 2)), line_total(1, dec(500, 2))]);
        assert_eq!(anna, dec(3500, 2));
        assert!(anna <= high_spend_threshold());

        // One order: qty 5 @ 10.00 = 50.00, above threshold
        let bruno = order_total([line_total(5, dec(1000, 2))]);
        assert_eq!(bruno, dec(5000, 2));
        assert!(bruno > high_spend_threshold());

        // Exactly 40.00 does not exceed the threshold, so it is excluded
        let exactly = order_total([line_total(4, dec(1000, 2))]);
        assert_eq!(exactly, dec(4000, 2));
        assert!(exactly <= high_spend_threshold());
    }
}
