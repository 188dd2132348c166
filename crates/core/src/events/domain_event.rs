//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about state changes. Embedding adapters
/// translate them into platform-specific actions (price re-render in
/// other browsing contexts, analytics, etc.).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// The persisted currency preference was written or cleared.
    PreferenceChanged {
        /// New region key, `None` when the preference was cleared.
        region: Option<String>,
    },

    /// A contact form submission was processed.
    ContactSubmitted { accepted: bool },
}

impl DomainEvent {
    /// Creates a PreferenceChanged event.
    pub fn preference_changed(region: Option<String>) -> Self {
        Self::PreferenceChanged { region }
    }

    /// Creates a ContactSubmitted event.
    pub fn contact_submitted(accepted: bool) -> Self {
        Self::ContactSubmitted { accepted }
    }
}
