//! Map-backed preference store with storage-event fan-out.

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use std::sync::RwLock;

use adflow_core::errors::{Result, StoreError};
use adflow_core::preferences::PreferenceStore;

type Watcher = Box<dyn Fn(&str, Option<&str>) + Send + Sync>;

/// Process-local key-value store, one instance per "origin".
///
/// Writes and removals notify every registered watcher with the key and
/// the new value (`None` on removal). Notification is best-effort and
/// last-write-wins, like the browser storage events it stands in for;
/// there is no locking across contexts and no transactional guarantee.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
    watchers: RwLock<Vec<Watcher>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a storage-change watcher. Watchers run synchronously on
    /// the writing thread and must be fast.
    pub fn watch(&self, watcher: impl Fn(&str, Option<&str>) + Send + Sync + 'static) {
        self.watchers.write().unwrap().push(Box::new(watcher));
    }

    fn notify(&self, key: &str, new_value: Option<&str>) {
        let watchers = self.watchers.read().unwrap();
        debug!(
            "Notifying {} watcher(s) of change to '{}'",
            watchers.len(),
            key
        );
        for watcher in watchers.iter() {
            watcher(key, new_value);
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<String> {
        self.entries
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(key.to_string()).into())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.notify(key, Some(value));
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        // Removing an absent key fires no event, matching removeItem.
        if self.entries.remove(key).is_some() {
            self.notify(key, None);
        }
        Ok(())
    }
}
