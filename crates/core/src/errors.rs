//! Core error types for the adflow behavior layer.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! failures are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the behavior layer.
///
/// Almost every operation in this crate degrades instead of failing:
/// unknown region and package keys fall back to defaults, and malformed
/// numeric input coerces to zero. The variants below cover the store
/// boundary, which real backends can legitimately fail at.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for the preference store.
///
/// This enum uses `String` for all error details, allowing the storage
/// layer to convert backend-specific errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested key was not present.
    #[error("Key not found: {0}")]
    NotFound(String),

    /// A read against the backing store failed.
    #[error("Store read failed: {0}")]
    ReadFailed(String),

    /// A write against the backing store failed.
    #[error("Store write failed: {0}")]
    WriteFailed(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
