//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Formats a monetary amount as a price string with two decimal places.
///
/// Usage in templates: `{{ row.total_spent|money }}`
#[askama::filter_fn]
pub fn money(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("${value:.2}"))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    #[test]
    fn test_money_formats_two_decimal_places() {
        let rendered = format!("${:.2}", Decimal::new(3500, 2));
        assert_eq!(rendered, "$35.00");

        let rendered = format!("${:.2}", Decimal::new(5, 1));
        assert_eq!(rendered, "$0.50");

        let rendered = format!("${:.2}", Decimal::ZERO);
        assert_eq!(rendered, "$0.00");
    }
}
