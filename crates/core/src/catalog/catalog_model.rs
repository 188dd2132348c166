//! Static package catalog.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Identifier of a service package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageKey {
    #[serde(rename = "golden-package")]
    Golden,
    #[serde(rename = "premium-package")]
    Premium,
    #[serde(rename = "meta-ads-package")]
    MetaAds,
}

impl PackageKey {
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw {
            "golden-package" => Some(Self::Golden),
            "premium-package" => Some(Self::Premium),
            "meta-ads-package" => Some(Self::MetaAds),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Golden => "golden-package",
            Self::Premium => "premium-package",
            Self::MetaAds => "meta-ads-package",
        }
    }
}

/// A named bundle of service features with a base monthly price in USD.
#[derive(Debug, Clone)]
pub struct PackageDefinition {
    pub key: PackageKey,
    pub name: &'static str,
    pub base_price_usd: Decimal,
    pub features: &'static [&'static str],
}

static CATALOG: OnceLock<[PackageDefinition; 3]> = OnceLock::new();

/// The full catalog, in display order.
pub fn catalog() -> &'static [PackageDefinition; 3] {
    CATALOG.get_or_init(|| {
        [
            PackageDefinition {
                key: PackageKey::Golden,
                name: "Golden Package",
                base_price_usd: dec!(2500),
                features: &[
                    "Facebook+Instagram Account Management",
                    "Weekly 3 Posting On Social Media",
                    "5 Lac+ Reach & Impressions",
                    "Festival Post",
                    "6 Days Leads Generation in Week",
                    "Customize Inquiry form for Genuine Inquiry in Meta Ads",
                ],
            },
            PackageDefinition {
                key: PackageKey::Premium,
                name: "Premium Package",
                base_price_usd: dec!(5800),
                features: &[
                    "Facebook+Instagram Account Management",
                    "Weekly 3 Posting On Social Media",
                    "8 Lac+ Reach & Impressions",
                    "Festival Post",
                    "Calling Support from our side",
                    "End to end follow-ups from our side",
                    "7 Days Leads Generation in Week",
                    "Customize Inquiry form for Genuine Inquiry in Meta Ads",
                ],
            },
            PackageDefinition {
                key: PackageKey::MetaAds,
                name: "Meta Ads Package",
                base_price_usd: dec!(10900),
                features: &[
                    "Facebook+Instagram Account Management",
                    "Weekly 3 Posting On Social Media",
                    "8 Lac+ Reach & Impressions",
                    "Festival Post",
                    "7 Days Leads Generation in Week",
                ],
            },
        ]
    })
}

/// Looks up a package by its raw key. Unknown keys return `None`.
pub fn find_by_key(raw: &str) -> Option<&'static PackageDefinition> {
    let key = PackageKey::from_key(raw)?;
    catalog().iter().find(|p| p.key == key)
}

/// Base price for a raw package key. Unknown keys resolve to zero.
pub fn base_price_usd(raw: &str) -> Decimal {
    find_by_key(raw)
        .map(|p| p.base_price_usd)
        .unwrap_or(Decimal::ZERO)
}
