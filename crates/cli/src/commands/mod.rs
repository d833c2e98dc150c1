//! CLI command implementations.

use rust_decimal::Decimal;

pub mod cart;
pub mod stock;

/// Format a decimal amount as a display price.
pub(crate) fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(1999, 2)), "$19.99");
        assert_eq!(format_price(Decimal::new(5, 1)), "$0.50");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }
}
