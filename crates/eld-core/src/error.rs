//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `eld-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A coordinate string did not parse as `"LAT,LON"` decimal degrees, or
    /// parsed to values outside the valid WGS-84 range.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinate(String),

    /// A stored segment-kind code was not one of the known values.
    #[error("unknown segment kind code {0:?}")]
    UnknownSegmentKind(String),

    /// A trip-id string was not a valid UUID.
    #[error("invalid trip id: {0}")]
    InvalidTripId(#[from] uuid::Error),
}

/// Shorthand result type for `eld-core`.
pub type CoreResult<T> = Result<T, CoreError>;
