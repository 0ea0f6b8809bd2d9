//! `eld-app` — the application facade of the eld trip planner.
//!
//! Ties the pieces together: one call plans a trip (scheduling core),
//! persists the result atomically (store), and returns the durable record;
//! a second call projects a stored trip into the duty-status timeline the
//! log display needs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                |
//! |--------------|-----------------------------------------|
//! | [`planner`]  | `TripPlanner`, `PlannedTrip`            |
//! | [`timeline`] | `TimelineEntry`, `build_timeline`       |
//! | [`error`]    | `AppError`, `AppResult<T>`              |

pub mod error;
pub mod planner;
pub mod timeline;


pub use error::{AppError, AppResult};
pub use planner::{PlannedTrip, TripPlanner};
pub use timeline::{TimelineEntry, build_timeline};
