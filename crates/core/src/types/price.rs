//! GBP price formatting helpers.
//!
//! Formatting goes through integer pence so the output always carries exactly
//! two decimal places regardless of the scale of the stored decimal.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Format a decimal amount with exactly two decimal places (e.g. `29.90`).
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let pence = (amount * Decimal::ONE_HUNDRED)
        .round()
        .to_i128()
        .unwrap_or(0);
    let sign = if pence < 0 { "-" } else { "" };
    let pence = pence.abs();
    format!("{sign}{}.{:02}", pence / 100, pence % 100)
}

/// Format a decimal amount as a GBP display string (e.g. `£29.90`).
#[must_use]
pub fn format_gbp(amount: Decimal) -> String {
    format!("£{}", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pads_to_two_decimal_places() {
        let amount = Decimal::from_str("29.9").expect("decimal");
        assert_eq!(format_amount(amount), "29.90");
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(format_amount(Decimal::from(45)), "45.00");
    }

    #[test]
    fn test_rounds_sub_penny_amounts() {
        let amount = Decimal::from_str("12.345").expect("decimal");
        assert_eq!(format_amount(amount), "12.34");
        let amount = Decimal::from_str("12.346").expect("decimal");
        assert_eq!(format_amount(amount), "12.35");
    }

    #[test]
    fn test_gbp_prefix() {
        let amount = Decimal::from_str("29.9").expect("decimal");
        assert_eq!(format_gbp(amount), "£29.90");
    }

    #[test]
    fn test_sub_pound_amount() {
        let amount = Decimal::from_str("0.5").expect("decimal");
        assert_eq!(format_gbp(amount), "£0.50");
    }
}
