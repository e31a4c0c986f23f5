//! Per-customer order detail route handler.
//!
//! The one page with a user-facing error condition: an unknown customer id
//! renders as 404, never as a server error.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use rust_decimal::Decimal;
use tracing::instrument;

use kontor_core::{CustomerId, order_total};

use crate::db::{CustomerRepository, OrderRepository};
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::{Customer, OrderLine, OrderSummary};
use crate::state::AppState;

/// One order as shown on the detail page.
pub struct OrderView {
    pub id: i32,
    pub order_date: String,
    pub shipping_address: String,
    pub billing_address: String,
    pub total_amount: Decimal,
    pub lines: Vec<OrderLineView>,
}

/// One order line as shown on the detail page.
pub struct OrderLineView {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Attach each line to its order, preserving order and line ordering.
fn build_order_views(orders: Vec<OrderSummary>, lines: Vec<OrderLine>) -> Vec<OrderView> {
    orders
        .into_iter()
        .map(|order| {
            let order_lines = lines
                .iter()
                .filter(|line| line.order_id == order.id)
                .map(|line| OrderLineView {
                    product_name: line.product_name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    line_total: line.line_total,
                })
                .collect();

            OrderView {
                id: order.id.as_i32(),
                order_date: order.order_date.format("%Y-%m-%d %H:%M").to_string(),
                shipping_address: order.shipping_address,
                billing_address: order.billing_address,
                total_amount: order.total_amount,
                lines: order_lines,
            }
        })
        .collect()
}

/// Order detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/detail.html")]
pub struct OrderDetailTemplate {
    pub customer: Customer,
    pub orders: Vec<OrderView>,
    pub grand_total: Decimal,
}

/// Order detail page handler.
///
/// # Errors
///
/// Returns `AppError::NotFound` (404) if the customer id matches no customer.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<OrderDetailTemplate> {
    let customer_id = CustomerId::new(customer_id);

    let customer = CustomerRepository::new(state.pool())
        .get_by_id(customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {customer_id}")))?;

    let order_repo = OrderRepository::new(state.pool());
    let orders = order_repo.list_for_customer(customer_id).await?;
    let lines = order_repo.list_lines_for_customer(customer_id).await?;

    // Grand total across all of the customer's orders; zero when there are none
    let grand_total = order_total(orders.iter().map(|o| o.total_amount));

    Ok(OrderDetailTemplate {
        customer,
        orders: build_order_views(orders, lines),
        grand_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use kontor_core::OrderId;

    fn dec(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    fn summary(id: i32, total: Decimal) -> OrderSummary {
        OrderSummary {
            id: OrderId::new(id),
            order_date: Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).single().expect("valid date"),
            shipping_address: "Hauptstrasse 1".to_string(),
            billing_address: "Hauptstrasse 1".to_string(),
            total_amount: total,
        }
    }

    fn line(order_id: i32, product: &str, quantity: i32, unit_price: Decimal) -> OrderLine {
        OrderLine {
            order_id: OrderId::new(order_id),
            product_name: product.to_string(),
            quantity,
            unit_price,
            line_total: kontor_core::line_total(quantity, unit_price),
        }
    }

    #[test]
    fn test_build_order_views_groups_lines() {
        let orders = vec![summary(1, dec(3500, 2)), summary(2, dec(0, 2))];
        let lines = vec![
            line(1, "Kaffee", 3, dec(1000, 2)),
            line(1, "Tee", 1, dec(500, 2)),
        ];

        let views = build_order_views(orders, lines);

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].lines.len(), 2);
        assert_eq!(views[0].lines[0].line_total, dec(3000, 2));
        // An order with no items renders with an empty line table
        assert!(views[1].lines.is_empty());
    }

    #[test]
    fn test_grand_total_zero_without_orders() {
        let total = order_total(std::iter::empty());
        assert_eq!(total, Decimal::ZERO);
    }
}
