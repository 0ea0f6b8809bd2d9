//! `eld-store` — SQLite persistence for planned trips.
//!
//! One database file holds three tables: `trips`, `segments`, and
//! `daily_logs`.  A whole plan is persisted in a single transaction, so a
//! mid-run failure (for example the second routing call failing after the
//! first succeeded) never leaves a partially-written itinerary visible.
//!
//! Decimal duty-hour values are stored as TEXT — SQLite REAL is binary
//! floating point, and round-tripping regulatory arithmetic through it
//! would reintroduce exactly the drift the decimal types exist to avoid.
//!
//! # Crate layout
//!
//! | Module     | Contents                         |
//! |------------|----------------------------------|
//! | [`record`] | `TripRecord`                     |
//! | [`store`]  | `TripStore` (open/persist/fetch) |
//! | [`error`]  | `StoreError`, `StoreResult<T>`   |

pub mod error;
pub mod record;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use record::TripRecord;
pub use store::TripStore;
