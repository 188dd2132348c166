//! Pricing module - region table, currency conversion, and price formatting.

pub mod format;
pub mod regions;

mod pricing_model;
mod pricing_service;
mod pricing_traits;

#[cfg(test)]
mod pricing_service_tests;

pub use format::format_amount;
pub use pricing_model::{parse_base_price, PackageOption, PriceTag};
pub use pricing_service::{convert, PricingService};
pub use pricing_traits::PricingServiceTrait;
pub use regions::{config_for, CurrencyConfig, DigitGrouping, Locale, RegionKey};
