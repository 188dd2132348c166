use log::warn;
use serde::Serialize;
use std::sync::Arc;

use crate::catalog::catalog_model;
use crate::pricing::PricingServiceTrait;

/// Package detail view, priced under the current preference.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageDetail {
    pub key: String,
    pub name: String,
    /// e.g. `₹2,08,500 / month`
    pub price_label: String,
    pub features: Vec<String>,
}

/// Derives display views from the static catalog.
pub struct CatalogService {
    pricing: Arc<dyn PricingServiceTrait>,
}

impl CatalogService {
    pub fn new(pricing: Arc<dyn PricingServiceTrait>) -> Self {
        Self { pricing }
    }

    /// Resolves a raw package key to its detail view. Unknown keys hide
    /// the detail section instead of failing.
    pub fn package_detail(&self, raw_key: &str) -> Option<PackageDetail> {
        let Some(package) = catalog_model::find_by_key(raw_key) else {
            if !raw_key.is_empty() {
                warn!("Unknown package key '{}', hiding detail view", raw_key);
            }
            return None;
        };

        Some(PackageDetail {
            key: package.key.as_key().to_string(),
            name: package.name.to_string(),
            price_label: self.pricing.formatted_monthly_price(package.key.as_key()),
            features: package.features.iter().map(|f| f.to_string()).collect(),
        })
    }

    /// Templated sentence seeded into the message field for a package.
    pub fn seed_message(&self, detail: &PackageDetail) -> String {
        format!(
            "I'm interested in the {} package ({}). Please provide more details.",
            detail.name, detail.price_label
        )
    }
}
