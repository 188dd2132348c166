//! Tests for preference-aware price rendering.

#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::preferences::{PreferenceChange, PreferenceServiceTrait};
    use crate::pricing::{convert, PricingService, PricingServiceTrait, RegionKey};
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    /// Preference stub pinned to a fixed region.
    struct FixedPreference {
        region: Mutex<Option<RegionKey>>,
    }

    impl FixedPreference {
        fn new(region: Option<RegionKey>) -> Arc<Self> {
            Arc::new(Self {
                region: Mutex::new(region),
            })
        }
    }

    #[async_trait]
    impl PreferenceServiceTrait for FixedPreference {
        fn current_region(&self) -> Option<RegionKey> {
            *self.region.lock().unwrap()
        }

        async fn select_region(&self, region: Option<RegionKey>) -> Result<PreferenceChange> {
            *self.region.lock().unwrap() = region;
            Ok(PreferenceChange {
                region: region.map(|k| k.as_key().to_string()),
                changed_at: Utc::now(),
            })
        }
    }

    fn service(region: Option<RegionKey>) -> PricingService {
        PricingService::new(FixedPreference::new(region))
    }

    #[test]
    fn test_convert_is_deterministic_per_region() {
        assert_eq!(convert(Some(RegionKey::Usa), dec!(2500)), "$2,500");
        assert_eq!(convert(Some(RegionKey::India), dec!(2500)), "\u{20B9}2,08,500");
        assert_eq!(convert(Some(RegionKey::Canada), dec!(2500)), "$3,400");
        assert_eq!(convert(Some(RegionKey::Australia), dec!(2500)), "$3,825");
    }

    #[test]
    fn test_absent_region_shows_base_price() {
        assert_eq!(convert(None, dec!(5800)), "$5,800");
    }

    #[test]
    fn test_monthly_price_follows_preference() {
        let svc = service(Some(RegionKey::India));
        assert_eq!(
            svc.formatted_monthly_price("golden-package"),
            "\u{20B9}2,08,500 / month"
        );

        let svc = service(Some(RegionKey::Usa));
        assert_eq!(
            svc.formatted_monthly_price("premium-package"),
            "$5,800 / month"
        );
    }

    #[test]
    fn test_unknown_package_prices_at_zero() {
        let service = service(None);
        assert_eq!(service.formatted_monthly_price("diamond-package"), "$0 / month");
    }

    #[test]
    fn test_attr_price_coerces_garbage() {
        let service = service(Some(RegionKey::Canada));
        assert_eq!(service.price_for_attr("2500"), "$3,400");
        assert_eq!(service.price_for_attr("not-a-number"), "$0");
    }

    #[test]
    fn test_price_tags_cover_catalog_in_order() {
        let service = service(Some(RegionKey::India));
        let tags = service.price_tags();

        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0].package_key, "golden-package");
        assert_eq!(tags[0].amount, "\u{20B9}2,08,500");
        assert_eq!(tags[1].amount, "\u{20B9}4,83,700");
        assert_eq!(tags[2].amount, "\u{20B9}9,09,100");
        assert!(tags[2].monthly_label.ends_with(" / month"));
    }

    #[test]
    fn test_package_options_embed_name_and_price() {
        let service = service(None);
        let options = service.package_options();

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "Golden Package - $2,500/month");
        assert_eq!(options[2].label, "Meta Ads Package - $10,900/month");
    }
}
