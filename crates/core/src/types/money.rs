//! Exact decimal money arithmetic.
//!
//! All monetary values in Kontor are `rust_decimal::Decimal` with two decimal
//! places, matching the NUMERIC(10,2) columns in the database. Totals derived
//! from line items must never go through floating point: they are compared
//! against a spending threshold and shown in equality-sensitive reports.

use rust_decimal::Decimal;

/// Total for a single order line: quantity times the unit price captured at
/// order time.
#[must_use]
pub fn line_total(quantity: i32, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity) * unit_price
}

/// Total for an order (or any collection of line/order totals).
///
/// An empty iterator yields zero, so an order without items has a total of
/// 0.00 rather than no total.
#[must_use]
pub fn order_total<I>(totals: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    totals.into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    #[test]
    fn test_line_total() {
        // qty 3 @ 10.00
        assert_eq!(line_total(3, dec(1000, 2)), dec(3000, 2));
        // qty 1 @ 5.00
        assert_eq!(line_total(1, dec(500, 2)), dec(500, 2));
    }

    #[test]
    fn test_order_total_empty_is_zero() {
        assert_eq!(order_total(std::iter::empty()), Decimal::ZERO);
    }

    #[test]
    fn test_order_total_sums_lines() {
        // qty 3 @ 10.00 plus qty 1 @ 5.00 = 35.00
        let total = order_total([line_total(3, dec(1000, 2)), line_total(1, dec(500, 2))]);
        assert_eq!(total, dec(3500, 2));
    }

    #[test]
    fn test_no_floating_point_drift() {
        // 0.10 added ten times is exactly 1.00
        let total = order_total(std::iter::repeat_n(dec(10, 2), 10));
        assert_eq!(total, dec(100, 2));
    }
}
