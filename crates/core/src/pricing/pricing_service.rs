use rust_decimal::Decimal;
use std::sync::Arc;

use crate::catalog;
use crate::constants::PER_MONTH_SUFFIX;
use crate::preferences::PreferenceServiceTrait;
use crate::pricing::format::format_amount;
use crate::pricing::regions::{config_for, RegionKey};
use crate::pricing::{parse_base_price, PackageOption, PriceTag, PricingServiceTrait};

/// Converts a base USD amount for a region and renders it.
///
/// An absent region renders the untouched base price through the `usa`
/// configuration (rate 1); the output is always a well-formed currency
/// string.
pub fn convert(region: Option<RegionKey>, amount_usd: Decimal) -> String {
    let config = config_for(region);
    format_amount(config, amount_usd * config.rate)
}

/// Preference-aware price rendering over the static catalog.
pub struct PricingService {
    preferences: Arc<dyn PreferenceServiceTrait>,
}

impl PricingService {
    pub fn new(preferences: Arc<dyn PreferenceServiceTrait>) -> Self {
        Self { preferences }
    }
}

impl PricingServiceTrait for PricingService {
    fn price_for_display(&self, amount_usd: Decimal) -> String {
        convert(self.preferences.current_region(), amount_usd)
    }

    fn price_for_attr(&self, raw_base_price: &str) -> String {
        self.price_for_display(parse_base_price(raw_base_price))
    }

    fn formatted_monthly_price(&self, package_key: &str) -> String {
        let amount = self.price_for_display(catalog::base_price_usd(package_key));
        format!("{}{}", amount, PER_MONTH_SUFFIX)
    }

    fn price_tags(&self) -> Vec<PriceTag> {
        let region = self.preferences.current_region();
        catalog::catalog()
            .iter()
            .map(|package| {
                let amount = convert(region, package.base_price_usd);
                PriceTag {
                    package_key: package.key.as_key().to_string(),
                    monthly_label: format!("{}{}", amount, PER_MONTH_SUFFIX),
                    amount,
                }
            })
            .collect()
    }

    fn package_options(&self) -> Vec<PackageOption> {
        let region = self.preferences.current_region();
        catalog::catalog()
            .iter()
            .map(|package| PackageOption {
                package_key: package.key.as_key().to_string(),
                label: format!(
                    "{} - {}/month",
                    package.name,
                    convert(region, package.base_price_usd)
                ),
            })
            .collect()
    }
}
