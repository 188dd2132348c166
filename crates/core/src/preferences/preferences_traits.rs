//! Store and service traits for the persisted preference.

use async_trait::async_trait;

use crate::errors::Result;
use crate::preferences::PreferenceChange;
use crate::pricing::RegionKey;

/// Contract for the single-key string store backing the preference
/// (browser-local storage in the embedding, an in-memory map in tests
/// and the `storage-memory` crate).
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Get a stored value. Returns `StoreError::NotFound` when the key
    /// is absent.
    fn get(&self, key: &str) -> Result<String>;

    /// Write a value under a key.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Contract for preference reads and writes at the domain level.
#[async_trait]
pub trait PreferenceServiceTrait: Send + Sync {
    /// Currently persisted region, if any. Unparsable or unreadable
    /// state degrades to `None` rather than failing.
    fn current_region(&self) -> Option<RegionKey>;

    /// Persists a selection (`Some`) or clears the preference (`None`),
    /// emitting a change event on success.
    async fn select_region(&self, region: Option<RegionKey>) -> Result<PreferenceChange>;
}
