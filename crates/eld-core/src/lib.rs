//! `eld-core` — foundational types for the eld trip-planner workspace.
//!
//! This crate is a dependency of every other `eld-*` crate.  It intentionally
//! has no `eld-*` dependencies and minimal external ones (only `uuid` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`ids`]   | `TripId` (UUID newtype)                                    |
//! | [`geo`]   | `GeoPoint`, coordinate-string parsing, haversine distance  |
//! | [`duty`]  | `SegmentKind`, `DutyStatus`, kind→status classification    |
//! | [`error`] | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod duty;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use duty::{DutyStatus, SegmentKind};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::TripId;
