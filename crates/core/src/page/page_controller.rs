use log::{debug, warn};
use std::sync::Arc;

use crate::catalog::{CatalogService, PackageDetail};
use crate::constants::CURRENCY_PREFERENCE_KEY;
use crate::contact::{ContactFormSession, FieldInput, SubmitOutcome, ToastController};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::page::{MenuState, PageRender, PriceRefresh};
use crate::preferences::PreferenceServiceTrait;
use crate::pricing::{PricingServiceTrait, RegionKey};

/// Thin adapter between the embedding's event handlers and the core.
///
/// Owns all store access and session state; every method is a plain call
/// returning a render model, so the embedding contains no logic beyond
/// painting. One controller per browsing context.
pub struct PageController {
    preferences: Arc<dyn PreferenceServiceTrait>,
    pricing: Arc<dyn PricingServiceTrait>,
    catalog: CatalogService,
    session: ContactFormSession,
    toast: ToastController,
    event_sink: Arc<dyn DomainEventSink>,
    menu: MenuState,
    open_package: Option<String>,
}

impl PageController {
    pub fn new(
        preferences: Arc<dyn PreferenceServiceTrait>,
        pricing: Arc<dyn PricingServiceTrait>,
    ) -> Self {
        Self {
            preferences,
            catalog: CatalogService::new(Arc::clone(&pricing)),
            pricing,
            session: ContactFormSession::new(),
            toast: ToastController::new(),
            event_sink: Arc::new(NoOpDomainEventSink),
            menu: MenuState::default(),
            open_package: None,
        }
    }

    /// Sets the domain event sink for this controller.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    /// Replaces the toast controller (tests shorten the dismiss delay).
    pub fn with_toast(mut self, toast: ToastController) -> Self {
        self.toast = toast;
        self
    }

    /// Page-load entry point. Reads the stored preference and applies an
    /// optional `package=` query parameter, read once.
    pub fn init(&mut self, query: &str) -> PageRender {
        let selector_value = self
            .preferences
            .current_region()
            .map(|r| r.as_key().to_string());

        let package_detail =
            super::query_param(query, "package").and_then(|raw| self.select_package(raw));
        let seeded_message = package_detail
            .as_ref()
            .and_then(|_| self.session.message_value().map(str::to_string));

        PageRender {
            selector_value,
            price_tags: self.pricing.price_tags(),
            package_options: self.pricing.package_options(),
            package_detail,
            seeded_message,
        }
    }

    /// Currency selector change. An empty value clears the preference
    /// (back to base prices); an unknown value re-renders with the
    /// default configuration but is never persisted.
    pub async fn on_region_selected(&self, raw: &str) -> Result<PriceRefresh> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.preferences.select_region(None).await?;
        } else {
            match RegionKey::from_key(raw) {
                Some(region) => {
                    self.preferences.select_region(Some(region)).await?;
                }
                None => {
                    warn!("Ignoring unknown region selection '{}'", raw);
                }
            }
        }
        Ok(self.refresh())
    }

    /// Storage-change notification from another browsing context.
    /// Foreign keys are ignored; the preference key triggers a re-render
    /// from the shared store, with no write of our own.
    pub fn on_storage_changed(&self, key: &str, _new_value: Option<&str>) -> Option<PriceRefresh> {
        if key != CURRENCY_PREFERENCE_KEY {
            return None;
        }
        debug!("Preference changed in another context, refreshing prices");
        Some(self.refresh())
    }

    /// Package selector change or query-parameter selection. Unknown or
    /// empty keys hide the detail section and drop an auto-filled
    /// message.
    pub fn on_package_selected(&mut self, raw: &str) -> Option<PackageDetail> {
        self.select_package(raw)
    }

    /// Per-field validation on input/blur/change.
    pub fn on_field_input(&mut self, name: &str, value: &str) -> bool {
        self.session.touch(name, value)
    }

    /// Full-form submission. Must run inside a Tokio runtime: an
    /// accepted submission arms the toast dismissal timer.
    pub fn on_submit(&mut self, inputs: &[FieldInput]) -> SubmitOutcome {
        let outcome = self.session.submit(inputs);
        let accepted = matches!(outcome, SubmitOutcome::Accepted { .. });

        if accepted {
            // Mirror of the form reset: the detail section closes too.
            self.open_package = None;
            self.toast.show();
        }
        self.event_sink
            .emit(DomainEvent::contact_submitted(accepted));

        outcome
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn is_toast_visible(&self) -> bool {
        self.toast.is_visible()
    }

    pub fn session(&self) -> &ContactFormSession {
        &self.session
    }

    fn refresh(&self) -> PriceRefresh {
        PriceRefresh {
            price_tags: self.pricing.price_tags(),
            package_options: self.pricing.package_options(),
            package_detail: self
                .open_package
                .as_deref()
                .and_then(|key| self.catalog.package_detail(key)),
        }
    }

    fn select_package(&mut self, raw: &str) -> Option<PackageDetail> {
        match self.catalog.package_detail(raw) {
            Some(detail) => {
                self.open_package = Some(detail.key.clone());
                let seed = self.catalog.seed_message(&detail);
                self.session.apply_auto_fill(&seed);
                Some(detail)
            }
            None => {
                self.open_package = None;
                self.session.clear_auto_filled_message();
                None
            }
        }
    }
}
