//! End-to-end tests for the page controller over a shared store,
//! covering the cross-context refresh contract.

#[cfg(test)]
mod tests {
    use crate::constants::CURRENCY_PREFERENCE_KEY;
    use crate::contact::FieldInput;
    use crate::errors::Result;
    use crate::page::PageController;
    use crate::preferences::{PreferenceService, PreferenceStore};
    use crate::pricing::PricingService;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Map-backed store shared between "browsing contexts".
    #[derive(Default)]
    struct SharedMapStore {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl PreferenceStore for SharedMapStore {
        fn get(&self, key: &str) -> Result<String> {
            self.entries
                .lock()
                .unwrap()
                .get(key)
                .cloned()
                .ok_or_else(|| crate::errors::StoreError::NotFound(key.to_string()).into())
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn controller(store: Arc<SharedMapStore>) -> PageController {
        let preferences = Arc::new(PreferenceService::new(store));
        let pricing = Arc::new(PricingService::new(Arc::clone(&preferences) as _));
        PageController::new(preferences, pricing)
    }

    fn valid_inputs() -> Vec<FieldInput> {
        vec![
            FieldInput::new("fullName", "Grace Hopper"),
            FieldInput::new("email", "grace@example.org"),
            FieldInput::new("message", "Please plan a full launch campaign."),
        ]
    }

    #[test]
    fn test_init_without_preference_shows_base_prices() {
        let mut page = controller(Arc::new(SharedMapStore::default()));

        let render = page.init("");

        assert_eq!(render.selector_value, None);
        assert_eq!(render.price_tags[0].amount, "$2,500");
        assert_eq!(render.package_detail, None);
        assert_eq!(render.seeded_message, None);
    }

    #[test]
    fn test_init_applies_package_query_param() {
        let mut page = controller(Arc::new(SharedMapStore::default()));

        let render = page.init("?package=premium-package");

        let detail = render.package_detail.unwrap();
        assert_eq!(detail.name, "Premium Package");
        assert_eq!(detail.price_label, "$5,800 / month");
        let seeded = render.seeded_message.unwrap();
        assert!(seeded.contains("Premium Package"));
        assert!(seeded.contains("$5,800 / month"));
    }

    #[tokio::test]
    async fn test_region_selection_persists_and_rerenders() {
        let store = Arc::new(SharedMapStore::default());
        let mut page = controller(Arc::clone(&store));
        page.init("?package=golden-package");

        let refresh = page.on_region_selected("india").await.unwrap();

        assert_eq!(
            store.get(CURRENCY_PREFERENCE_KEY).unwrap(),
            "india".to_string()
        );
        assert_eq!(refresh.price_tags[0].amount, "\u{20B9}2,08,500");
        // The open detail section re-prices too.
        let detail = refresh.package_detail.unwrap();
        assert_eq!(detail.price_label, "\u{20B9}2,08,500 / month");
    }

    #[tokio::test]
    async fn test_empty_selection_clears_preference() {
        let store = Arc::new(SharedMapStore::default());
        let page = controller(Arc::clone(&store));
        page.on_region_selected("canada").await.unwrap();

        let refresh = page.on_region_selected("").await.unwrap();

        assert!(store.get(CURRENCY_PREFERENCE_KEY).is_err());
        assert_eq!(refresh.price_tags[0].amount, "$2,500");
    }

    #[tokio::test]
    async fn test_unknown_selection_is_not_persisted() {
        let store = Arc::new(SharedMapStore::default());
        let page = controller(Arc::clone(&store));

        let refresh = page.on_region_selected("atlantis").await.unwrap();

        assert!(store.get(CURRENCY_PREFERENCE_KEY).is_err());
        // Falls back to the default configuration for rendering.
        assert_eq!(refresh.price_tags[0].amount, "$2,500");
    }

    #[tokio::test]
    async fn test_storage_change_refreshes_other_context() {
        let store = Arc::new(SharedMapStore::default());
        let page_a = controller(Arc::clone(&store));
        let page_b = controller(Arc::clone(&store));

        page_a.on_region_selected("india").await.unwrap();

        let refresh = page_b
            .on_storage_changed(CURRENCY_PREFERENCE_KEY, Some("india"))
            .unwrap();
        assert_eq!(refresh.price_tags[0].amount, "\u{20B9}2,08,500");
    }

    #[test]
    fn test_foreign_storage_keys_are_ignored() {
        let page = controller(Arc::new(SharedMapStore::default()));
        assert!(page.on_storage_changed("theme", Some("dark")).is_none());
    }

    #[test]
    fn test_package_seeding_respects_manual_message() {
        let mut page = controller(Arc::new(SharedMapStore::default()));
        page.on_field_input("message", "My own words, long enough.");

        page.on_package_selected("golden-package");

        assert_eq!(
            page.session().message_value(),
            Some("My own words, long enough.")
        );
    }

    #[test]
    fn test_deselecting_package_clears_seeded_message() {
        let mut page = controller(Arc::new(SharedMapStore::default()));
        page.on_package_selected("golden-package");
        assert!(page.session().is_message_auto_filled());

        let detail = page.on_package_selected("");

        assert!(detail.is_none());
        assert_eq!(page.session().message_value(), Some(""));
    }

    #[tokio::test]
    async fn test_accepted_submission_shows_toast_and_closes_detail() {
        let mut page = controller(Arc::new(SharedMapStore::default()));
        page.on_package_selected("meta-ads-package");

        page.on_submit(&valid_inputs());

        assert!(page.is_toast_visible());
        let refresh = page
            .on_storage_changed(CURRENCY_PREFERENCE_KEY, None)
            .unwrap();
        assert!(refresh.package_detail.is_none());
    }

    #[tokio::test]
    async fn test_rejected_submission_leaves_toast_hidden() {
        let mut page = controller(Arc::new(SharedMapStore::default()));

        page.on_submit(&[FieldInput::new("email", "not-an-email")]);

        assert!(!page.is_toast_visible());
        assert_eq!(page.session().feedback(), None);
    }
}
