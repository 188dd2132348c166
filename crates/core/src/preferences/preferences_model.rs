use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a preference mutation, returned to the caller after a
/// successful write or clear.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceChange {
    /// New region key, `None` when the preference was cleared.
    pub region: Option<String>,
    pub changed_at: DateTime<Utc>,
}
