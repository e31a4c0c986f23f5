//! Aggregate report route handlers.
//!
//! Each handler runs one report query and renders the rows as a table. Empty
//! result sets render as empty tables, never as errors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use tracing::instrument;

use crate::db::ReportRepository;
use crate::db::reports::{
    BestSellingProductRow, CustomerRevenueRow, CustomerWithOrdersRow, HighSpendingCustomerRow,
};
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Customers-with-orders report template.
#[derive(Template, WebTemplate)]
#[template(path = "reports/customers_with_orders.html")]
pub struct CustomersWithOrdersTemplate {
    pub rows: Vec<CustomerWithOrdersRow>,
}

/// Customers-with-orders report handler.
#[instrument(skip(state))]
pub async fn customers_with_orders(
    State(state): State<AppState>,
) -> Result<CustomersWithOrdersTemplate> {
    let rows = ReportRepository::new(state.pool())
        .customers_with_orders()
        .await?;

    Ok(CustomersWithOrdersTemplate { rows })
}

/// Customer revenue report template.
#[derive(Template, WebTemplate)]
#[template(path = "reports/customer_revenue.html")]
pub struct CustomerRevenueTemplate {
    pub rows: Vec<CustomerRevenueRow>,
}

/// Customer revenue report handler.
#[instrument(skip(state))]
pub async fn customer_revenue(State(state): State<AppState>) -> Result<CustomerRevenueTemplate> {
    let rows = ReportRepository::new(state.pool()).customer_revenue().await?;

    Ok(CustomerRevenueTemplate { rows })
}

/// Best-selling products report template.
#[derive(Template, WebTemplate)]
#[template(path = "reports/best_selling_products.html")]
pub struct BestSellingProductsTemplate {
    pub rows: Vec<BestSellingProductRow>,
}

/// Best-selling products report handler.
#[instrument(skip(state))]
pub async fn best_selling_products(
    State(state): State<AppState>,
) -> Result<BestSellingProductsTemplate> {
    let rows = ReportRepository::new(state.pool())
        .best_selling_products()
        .await?;

    Ok(BestSellingProductsTemplate { rows })
}

/// High-spending customers report template.
#[derive(Template, WebTemplate)]
#[template(path = "reports/high_spending_customers.html")]
pub struct HighSpendingCustomersTemplate {
    pub rows: Vec<HighSpendingCustomerRow>,
}

/// High-spending customers report handler.
#[instrument(skip(state))]
pub async fn high_spending_customers(
    State(state): State<AppState>,
) -> Result<HighSpendingCustomersTemplate> {
    let rows = ReportRepository::new(state.pool())
        .high_spending_customers()
        .await?;

    Ok(HighSpendingCustomersTemplate { rows })
}

/// Create the reports routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers-with-orders", get(customers_with_orders))
        .route("/customer-revenue", get(customer_revenue))
        .route("/best-selling-products", get(best_selling_products))
        .route("/high-spending-customers", get(high_spending_customers))
}
