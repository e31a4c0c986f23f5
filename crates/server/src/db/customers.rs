//! Customer repository for database operations.

use sqlx::PgPool;

use kontor_core::{CustomerId, Email};

use super::RepositoryError;
use crate::models::Customer;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for customer queries.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i32,
    first_name: String,
    last_name: String,
    email: String,
    address: String,
    city: String,
    postal_code: String,
    country: String,
    phone_number: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = RepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: CustomerId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email,
            address: row.address,
            city: row.city,
            postal_code: row.postal_code,
            country: row.country,
            phone_number: row.phone_number,
        })
    }
}

/// One customer-list row: the customer plus its order count.
///
/// Flat record consumed directly by the customers template.
#[derive(Debug, sqlx::FromRow)]
pub struct CustomerOverviewRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub country: String,
    pub order_count: i64,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all customers with their order counts.
    ///
    /// A single outer-join query: customers with no orders appear with an
    /// order count of zero.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_with_order_counts(&self) -> Result<Vec<CustomerOverviewRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, CustomerOverviewRow>(
            r"
            SELECT c.id, c.first_name, c.last_name, c.email, c.city, c.country,
                   COUNT(DISTINCT o.id) AS order_count
            FROM store.customer c
            LEFT JOIN store.order o ON o.customer_id = c.id
            GROUP BY c.id
            ORDER BY c.id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a customer by ID.
    ///
    /// Returns `None` if no customer has the given ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT id, first_name, last_name, email, address, city,
                   postal_code, country, phone_number
            FROM store.customer
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }
}
