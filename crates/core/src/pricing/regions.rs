//! Static region table: locale, currency, rate, and rounding per region.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Identifier selecting a currency/locale/rate configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKey {
    Usa,
    India,
    Canada,
    Australia,
}

impl RegionKey {
    /// Parses a raw region key. Keys are the exact lowercase identifiers
    /// used by the currency selector and the persisted preference.
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw {
            "usa" => Some(Self::Usa),
            "india" => Some(Self::India),
            "canada" => Some(Self::Canada),
            "australia" => Some(Self::Australia),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Usa => "usa",
            Self::India => "india",
            Self::Canada => "canada",
            Self::Australia => "australia",
        }
    }
}

/// How integer digits are grouped when rendering an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGrouping {
    /// Groups of three throughout: 1,234,567
    Western,
    /// Last three digits, then groups of two: 12,34,567
    Indian,
}

/// Rendering rules for a locale tag.
#[derive(Debug, Clone, Copy)]
pub struct Locale {
    pub tag: &'static str,
    pub symbol: &'static str,
    pub grouping: DigitGrouping,
}

/// Immutable conversion and rendering configuration for one region.
///
/// Invariant: `rate > 0` and `round >= 1` for every table entry.
#[derive(Debug, Clone)]
pub struct CurrencyConfig {
    pub locale: Locale,
    pub currency_code: &'static str,
    pub rate: Decimal,
    pub round: Decimal,
}

static REGION_TABLE: OnceLock<HashMap<RegionKey, CurrencyConfig>> = OnceLock::new();

fn region_table() -> &'static HashMap<RegionKey, CurrencyConfig> {
    REGION_TABLE.get_or_init(|| {
        let mut map = HashMap::new();

        map.insert(
            RegionKey::Usa,
            CurrencyConfig {
                locale: Locale {
                    tag: "en-US",
                    symbol: "$",
                    grouping: DigitGrouping::Western,
                },
                currency_code: "USD",
                rate: dec!(1),
                round: dec!(1),
            },
        );

        map.insert(
            RegionKey::India,
            CurrencyConfig {
                locale: Locale {
                    tag: "en-IN",
                    symbol: "\u{20B9}",
                    grouping: DigitGrouping::Indian,
                },
                currency_code: "INR",
                rate: dec!(83.4),
                round: dec!(100),
            },
        );

        map.insert(
            RegionKey::Canada,
            CurrencyConfig {
                locale: Locale {
                    tag: "en-CA",
                    symbol: "$",
                    grouping: DigitGrouping::Western,
                },
                currency_code: "CAD",
                rate: dec!(1.36),
                round: dec!(1),
            },
        );

        map.insert(
            RegionKey::Australia,
            CurrencyConfig {
                locale: Locale {
                    tag: "en-AU",
                    symbol: "$",
                    grouping: DigitGrouping::Western,
                },
                currency_code: "AUD",
                rate: dec!(1.53),
                round: dec!(1),
            },
        );

        map
    })
}

/// Resolves a region to its configuration. An absent region resolves to
/// the `usa` entry, so price rendering never fails.
pub fn config_for(region: Option<RegionKey>) -> &'static CurrencyConfig {
    let key = region.unwrap_or(RegionKey::Usa);
    region_table()
        .get(&key)
        .unwrap_or_else(|| &region_table()[&RegionKey::Usa])
}
