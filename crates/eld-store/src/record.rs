//! The durable trip row.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use eld_core::{GeoPoint, TripId};

/// One persisted trip: the planning inputs, the plan totals, and the
/// combined route geometry.  Segments and daily logs live in their own
/// tables, keyed by [`TripRecord::id`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: TripId,
    pub current_location: String,
    pub current_point: GeoPoint,
    pub pickup_location: String,
    pub pickup_point: GeoPoint,
    pub dropoff_location: String,
    pub dropoff_point: GeoPoint,
    /// Cycle hours already used at the moment the plan was made.
    pub cycle_used_hours: Decimal,
    /// Combined path as a GeoJSON `LineString`, serialized.
    pub route_geojson: String,
    pub total_distance_miles: Decimal,
    pub total_driving_hours: Decimal,
    pub created_at: DateTime<Utc>,
}
