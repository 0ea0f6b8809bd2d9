//! Error types for eld-store.

use thiserror::Error;

use eld_core::TripId;

/// Errors that can occur when persisting or fetching trip data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("trip {0} not found")]
    TripNotFound(TripId),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored value could not be decoded (bad decimal, timestamp, or
    /// segment-kind code).  Indicates external tampering or a schema
    /// mismatch, not a user error.
    #[error("corrupt stored value: {0}")]
    Corrupt(String),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
