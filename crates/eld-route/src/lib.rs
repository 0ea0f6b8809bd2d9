//! `eld-route` — the duration/distance provider seam of the eld trip planner.
//!
//! # Pluggability
//!
//! The scheduler calls routing via the [`RouteProvider`] trait, so
//! applications can plug in a live directions API (OpenRouteService, OSRM,
//! …) without touching the scheduling core, and tests can use a fixed stub.
//! The bundled [`GreatCircleProvider`] is deterministic and network-free:
//! haversine distance scaled by a road-circuity factor, duration from an
//! assumed average speed.
//!
//! # Crate layout
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`provider`] | `RouteLeg`, `RouteProvider`, `GreatCircleProvider` |
//! | [`geometry`] | GeoJSON `LineString` encoding of a path          |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                   |

pub mod error;
pub mod geometry;
pub mod provider;


pub use error::{RouteError, RouteResult};
pub use geometry::path_geojson;
pub use provider::{GreatCircleProvider, RouteLeg, RouteProvider};
