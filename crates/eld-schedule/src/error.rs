use rust_decimal::Decimal;
use thiserror::Error;

use eld_route::RouteError;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The driver's rolling cycle budget is spent.  Terminal for the current
    /// plan: no partial itinerary is returned, and waiting within a single
    /// run cannot restore cycle hours.
    #[error("driver has reached the {cap}-hour cycle limit ({used} hours used)")]
    CycleExhausted { used: Decimal, cap: Decimal },

    /// The rule set failed validation (zero caps, zero speed, …).
    #[error("invalid HOS rules: {0}")]
    InvalidRules(String),

    /// Provider-side routing failure, surfaced unchanged.
    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
