//! Error types for eld-route.

use thiserror::Error;

/// Errors surfaced by a routing provider.
///
/// The scheduling core propagates these unchanged and never retries; retry
/// policy belongs to the provider implementation itself.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The provider could not be reached at all.
    #[error("routing provider unavailable")]
    Unavailable,

    /// The provider answered with an error of its own.
    #[error("routing provider error: {0}")]
    Provider(String),
}

/// Alias for `Result<T, RouteError>`.
pub type RouteResult<T> = Result<T, RouteError>;
