//! Seed the database with a small demo dataset.
//!
//! Inserts three customers, three products and two orders so every report
//! page has something to show:
//!
//! - Anna Schmidt: one order totalling 35.00 (below the high-spend threshold)
//! - Bruno Keller: one order totalling 50.00 (above the threshold)
//! - Clara Vogt: no orders (appears in the revenue report with zeros)
//!
//! The command refuses to run against a database that already has customers.

use rust_decimal::Decimal;
use sqlx::{Postgres, Row, Transaction};
use tracing::info;

use super::{CommandError, connect};

/// Seed the database with demo data.
///
/// # Errors
///
/// Returns an error if the database URL is missing, a query fails, or the
/// database already contains customers.
pub async fn run() -> Result<(), CommandError> {
    info!("Connecting to database...");
    let pool = connect().await?;

    let existing: i64 = sqlx::query("SELECT COUNT(*) FROM store.customer")
        .fetch_one(&pool)
        .await?
        .try_get(0)?;
    if existing > 0 {
        return Err(CommandError::Aborted(format!(
            "database already has {existing} customers; refusing to seed"
        )));
    }

    let mut tx = pool.begin().await?;

    let anna = insert_customer(&mut tx, "Anna", "Schmidt", "anna.schmidt@example.de", "Berlin").await?;
    let bruno = insert_customer(&mut tx, "Bruno", "Keller", "bruno.keller@example.de", "Hamburg").await?;
    insert_customer(&mut tx, "Clara", "Vogt", "clara.vogt@example.de", "Munich").await?;

    let coffee = insert_product(&mut tx, "Filter Coffee", "Beverages", Decimal::new(1000, 2), 120).await?;
    let tea = insert_product(&mut tx, "Green Tea", "Beverages", Decimal::new(500, 2), 80).await?;
    insert_product(&mut tx, "Espresso Cups", "Accessories", Decimal::new(1450, 2), 35).await?;

    // Anna: qty 3 @ 10.00 + qty 1 @ 5.00 = 35.00
    let order = insert_order(&mut tx, anna).await?;
    insert_item(&mut tx, order, coffee, 3, Decimal::new(1000, 2)).await?;
    insert_item(&mut tx, order, tea, 1, Decimal::new(500, 2)).await?;

    // Bruno: qty 5 @ 10.00 = 50.00
    let order = insert_order(&mut tx, bruno).await?;
    insert_item(&mut tx, order, coffee, 5, Decimal::new(1000, 2)).await?;

    tx.commit().await?;

    info!("Seeded 3 customers, 3 products, 2 orders");
    Ok(())
}

async fn insert_customer(
    tx: &mut Transaction<'_, Postgres>,
    first_name: &str,
    last_name: &str,
    email: &str,
    city: &str,
) -> Result<i32, CommandError> {
    let row = sqlx::query(
        r"
        INSERT INTO store.customer
            (first_name, last_name, email, address, city, postal_code, country, phone_number)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        ",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind("Musterstrasse 1")
    .bind(city)
    .bind("10115")
    .bind("Germany")
    .bind("+49 30 1234567")
    .fetch_one(&mut **tx)
    .await?;

    Ok(row.try_get(0)?)
}

async fn insert_product(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
    category: &str,
    price: Decimal,
    inventory: i32,
) -> Result<i32, CommandError> {
    let row = sqlx::query(
        r"
        INSERT INTO store.product (name, description, price, category, inventory)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        ",
    )
    .bind(name)
    .bind(format!("{name} (demo data)"))
    .bind(price)
    .bind(category)
    .bind(inventory)
    .fetch_one(&mut **tx)
    .await?;

    Ok(row.try_get(0)?)
}

async fn insert_order(tx: &mut Transaction<'_, Postgres>, customer_id: i32) -> Result<i32, CommandError> {
    let row = sqlx::query(
        r"
        INSERT INTO store.order (customer_id, shipping_address, billing_address)
        VALUES ($1, $2, $2)
        RETURNING id
        ",
    )
    .bind(customer_id)
    .bind("Musterstrasse 1, Germany")
    .fetch_one(&mut **tx)
    .await?;

    Ok(row.try_get(0)?)
}

async fn insert_item(
    tx: &mut Transaction<'_, Postgres>,
    order_id: i32,
    product_id: i32,
    quantity: i32,
    price: Decimal,
) -> Result<(), CommandError> {
    sqlx::query(
        r"
        INSERT INTO store.order_item (order_id, product_id, quantity, price)
        VALUES ($1, $2, $3, $4)
        ",
    )
    .bind(order_id)
    .bind(product_id)
    .bind(quantity)
    .bind(price)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
