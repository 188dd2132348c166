//! Persisted currency preference - store trait and service.

mod preferences_model;
mod preferences_service;
mod preferences_traits;


pub use preferences_model::PreferenceChange;
pub use preferences_service::PreferenceService;
pub use preferences_traits::{PreferenceServiceTrait, PreferenceStore};
