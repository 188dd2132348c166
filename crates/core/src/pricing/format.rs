//! Locale-aware currency rendering with zero fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};

use super::regions::{CurrencyConfig, DigitGrouping};

/// Rounds a converted amount per the region's rounding increment.
///
/// An increment above one rounds to the nearest multiple of the
/// increment; otherwise the amount rounds to the nearest integer.
/// Midpoints round away from zero.
pub fn round_to_increment(value: Decimal, increment: Decimal) -> Decimal {
    if increment > Decimal::ONE {
        (value / increment).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            * increment
    } else {
        value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Renders an already-converted amount as a currency string: rounded per
/// the region, grouped per the locale, symbol-prefixed, no fraction.
pub fn format_amount(config: &CurrencyConfig, amount: Decimal) -> String {
    let rounded = round_to_increment(amount, config.round);
    let magnitude = rounded.abs().normalize().to_string();
    let grouped = match config.locale.grouping {
        DigitGrouping::Western => group_western(&magnitude),
        DigitGrouping::Indian => group_indian(&magnitude),
    };

    if rounded < Decimal::ZERO {
        format!("-{}{}", config.locale.symbol, grouped)
    } else {
        format!("{}{}", config.locale.symbol, grouped)
    }
}

fn group_western(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Indian grouping: the last three digits form one group, the rest pair up.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_bytes = head.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, b) in head_bytes.iter().enumerate() {
        if i > 0 && (head_bytes.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out.push(',');
    out.push_str(tail);
    out
}
