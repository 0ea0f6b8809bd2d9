//! Error types for eld-app.

use thiserror::Error;

use eld_core::TripId;
use eld_schedule::ScheduleError;
use eld_store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The trip exists but has no persisted segments to build a timeline
    /// from.
    #[error("no route data found for trip {0}")]
    NoRouteData(TripId),
}

pub type AppResult<T> = Result<T, AppError>;
