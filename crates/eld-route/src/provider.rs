//! Routing trait and the default great-circle implementation.
//!
//! # Units
//!
//! Distances are statute **miles**, durations are decimal **hours** — the
//! units the hours-of-service rules are written in.  Both are
//! `rust_decimal::Decimal` so downstream duty-hour arithmetic stays exact.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use eld_core::GeoPoint;

use crate::{RouteError, RouteResult};

// ── RouteLeg ──────────────────────────────────────────────────────────────────

/// The result of one routing query: totals for a single origin→destination
/// leg plus the decoded path geometry.
#[derive(Debug, Clone)]
pub struct RouteLeg {
    /// Total road distance, miles.
    pub distance_miles: Decimal,
    /// Total driving duration at the provider's assumed speeds, hours.
    pub duration_hours: Decimal,
    /// Decoded path, ordered origin → destination.
    pub path: Vec<GeoPoint>,
}

// ── RouteProvider trait ───────────────────────────────────────────────────────

/// Pluggable duration/distance provider.
///
/// Implement this trait to back the planner with a live directions API.
/// Implementations are treated as idempotent, side-effect-free calls;
/// timeout and retry policy live inside the implementation, never in the
/// scheduler.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so independent trips can be planned
/// concurrently against a shared provider.
pub trait RouteProvider: Send + Sync {
    /// Compute distance, duration, and path for one leg.
    fn route(&self, origin: GeoPoint, destination: GeoPoint) -> RouteResult<RouteLeg>;
}

// ── GreatCircleProvider ───────────────────────────────────────────────────────

/// Deterministic, network-free provider: haversine distance multiplied by a
/// road-circuity factor, duration derived from a fixed average speed, path
/// geometry a straight line between the endpoints.
///
/// Good enough for planning previews and indispensable for tests; swap in a
/// real [`RouteProvider`] for production routing.
pub struct GreatCircleProvider {
    /// Road distance ≈ great-circle distance × this factor.  Typical
    /// highway networks sit around 1.2.
    circuity_factor: f64,
    /// Assumed average speed, mph.  Usually the same figure the HOS rules
    /// assume so planned durations line up with duty arithmetic.
    average_speed_mph: Decimal,
}

impl GreatCircleProvider {
    pub fn new(circuity_factor: f64, average_speed_mph: Decimal) -> Self {
        Self { circuity_factor, average_speed_mph }
    }
}

impl RouteProvider for GreatCircleProvider {
    fn route(&self, origin: GeoPoint, destination: GeoPoint) -> RouteResult<RouteLeg> {
        let road_miles = origin.distance_miles(destination) * self.circuity_factor;

        // Finite f64 → Decimal conversion only fails on non-finite input,
        // which distance_miles cannot produce for valid coordinates.
        let distance_miles = Decimal::from_f64(road_miles)
            .ok_or_else(|| RouteError::Provider(format!("non-finite distance {road_miles}")))?
            .round_dp(2);

        if self.average_speed_mph <= Decimal::ZERO {
            return Err(RouteError::Provider(format!(
                "average speed must be positive, got {}",
                self.average_speed_mph
            )));
        }

        let duration_hours = distance_miles / self.average_speed_mph;

        Ok(RouteLeg {
            distance_miles,
            duration_hours,
            path: vec![origin, destination],
        })
    }
}
