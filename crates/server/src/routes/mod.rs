//! HTTP route handlers for the back office.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                   - Home page
//! GET  /health                             - Health check
//! GET  /health/ready                       - Readiness check (database)
//!
//! # Entities
//! GET  /customers                          - Customer list with order counts
//! GET  /products                           - Product list
//! GET  /orders/{customer_id}               - Per-customer order detail (404 on unknown id)
//!
//! # Aggregate reports
//! GET  /reports/customers-with-orders      - Customers that placed at least one order
//! GET  /reports/customer-revenue           - Order count and revenue per customer
//! GET  /reports/best-selling-products      - Products by distinct order count
//! GET  /reports/high-spending-customers    - Customers above the spend threshold
//!
//! # Q&A
//! GET  /questions                          - Q&A section index
//! GET  /questions/{section}                - Q&A section detail (404 on unknown)
//! ```

pub mod customers;
pub mod home;
pub mod orders;
pub mod products;
pub mod questions;
pub mod reports;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the application routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/customers", get(customers::index))
        .route("/products", get(products::index))
        .route("/orders/{customer_id}", get(orders::show))
        .nest("/reports", reports::router())
        .nest("/questions", questions::router())
}
