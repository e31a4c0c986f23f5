//! Customers list route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::db::CustomerRepository;
use crate::db::customers::CustomerOverviewRow;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Customers list page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/index.html")]
pub struct CustomersIndexTemplate {
    pub customers: Vec<CustomerOverviewRow>,
}

/// Customers list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<CustomersIndexTemplate> {
    let customers = CustomerRepository::new(state.pool())
        .list_with_order_counts()
        .await?;

    Ok(CustomersIndexTemplate { customers })
}
