use rust_decimal::Decimal;

use crate::pricing::{PackageOption, PriceTag};

/// Contract for preference-aware price rendering.
///
/// Region-free conversion lives in [`crate::pricing::convert`]; this
/// trait covers the operations that resolve the persisted preference.
pub trait PricingServiceTrait: Send + Sync {
    /// Formats a base USD amount under the current preference.
    fn price_for_display(&self, amount_usd: Decimal) -> String;

    /// Formats a raw `data-base-price` attribute value; malformed input
    /// renders as zero.
    fn price_for_attr(&self, raw_base_price: &str) -> String;

    /// `{formatted} / month` for a package key; unknown keys price at zero.
    fn formatted_monthly_price(&self, package_key: &str) -> String;

    /// Rendered prices for every catalog entry.
    fn price_tags(&self) -> Vec<PriceTag>;

    /// Dropdown labels (`{name} - {formatted}/month`) for every catalog entry.
    fn package_options(&self) -> Vec<PackageOption>;
}
