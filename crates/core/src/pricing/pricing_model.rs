use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rendered price for one catalog entry, ready for a price element.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceTag {
    pub package_key: String,
    /// Formatted amount, e.g. `₹2,08,500`.
    pub amount: String,
    /// Amount with the monthly suffix, e.g. `₹2,08,500 / month`.
    pub monthly_label: String,
}

/// Label for one entry of the package selector dropdown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageOption {
    pub package_key: String,
    /// e.g. `Golden Package - $2,500/month`
    pub label: String,
}

/// Parses a base-price attribute value. Malformed input coerces to zero
/// so price rendering never fails on bad markup.
pub fn parse_base_price(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim()).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_base_price_accepts_numbers() {
        assert_eq!(parse_base_price("2500"), dec!(2500));
        assert_eq!(parse_base_price("  5800 "), dec!(5800));
        assert_eq!(parse_base_price("10900.5"), dec!(10900.5));
    }

    #[test]
    fn test_parse_base_price_coerces_garbage_to_zero() {
        assert_eq!(parse_base_price(""), Decimal::ZERO);
        assert_eq!(parse_base_price("abc"), Decimal::ZERO);
        assert_eq!(parse_base_price("12px"), Decimal::ZERO);
    }
}
