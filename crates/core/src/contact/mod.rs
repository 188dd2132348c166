//! Contact form - field kinds, validation rules, and the submit session.

mod contact_model;
mod contact_rules;
mod contact_service;


pub use contact_model::{FieldInput, FieldKind, FieldState, SubmitOutcome};
pub use contact_rules::validate;
pub use contact_service::{ContactFormSession, ToastController};
