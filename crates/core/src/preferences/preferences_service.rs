use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;

use crate::constants::CURRENCY_PREFERENCE_KEY;
use crate::errors::{Error, Result, StoreError};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::preferences::{PreferenceChange, PreferenceServiceTrait, PreferenceStore};
use crate::pricing::RegionKey;

/// Domain-level access to the persisted currency preference.
///
/// Reads degrade to "no preference" on any failure; writes go through
/// the store and notify the event sink so other contexts can refresh.
pub struct PreferenceService {
    store: Arc<dyn PreferenceStore>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl PreferenceService {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Sets the domain event sink for this service.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }
}

#[async_trait]
impl PreferenceServiceTrait for PreferenceService {
    fn current_region(&self) -> Option<RegionKey> {
        match self.store.get(CURRENCY_PREFERENCE_KEY) {
            Ok(raw) => {
                let region = RegionKey::from_key(&raw);
                if region.is_none() {
                    warn!("Stored currency preference '{}' is not a known region", raw);
                }
                region
            }
            Err(Error::Store(StoreError::NotFound(_))) => None,
            Err(e) => {
                warn!("Failed to read currency preference: {}. Treating as unset", e);
                None
            }
        }
    }

    async fn select_region(&self, region: Option<RegionKey>) -> Result<PreferenceChange> {
        match region {
            Some(key) => {
                self.store
                    .set(CURRENCY_PREFERENCE_KEY, key.as_key())
                    .await?;
                debug!("Currency preference set to '{}'", key.as_key());
            }
            None => {
                self.store.remove(CURRENCY_PREFERENCE_KEY).await?;
                debug!("Currency preference cleared");
            }
        }

        let change = PreferenceChange {
            region: region.map(|k| k.as_key().to_string()),
            changed_at: Utc::now(),
        };
        self.event_sink
            .emit(DomainEvent::preference_changed(change.region.clone()));

        Ok(change)
    }
}
