//! The activity segment — one scheduled unit of the journey.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use eld_core::{GeoPoint, SegmentKind};

/// One scheduled unit of the itinerary: a driving chunk, a mandated stop,
/// or the pickup/dropoff work stop.
///
/// Segments are produced only by the leg processor, are contiguous by
/// construction (`end_time[n] == start_time[n+1]`), and are immutable once
/// emitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivitySegment {
    pub kind: SegmentKind,
    /// Sequence index: starts at 0, strictly increasing, no gaps, shared
    /// across both legs of a trip.
    pub order: u32,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Duration in decimal hours.  Kept alongside the timestamps so duty
    /// arithmetic stays exact; the timestamps are rounded to milliseconds.
    pub duration_hours: Decimal,
    pub note: String,
}

impl ActivitySegment {
    /// Build a segment starting at `start` with the given decimal-hour
    /// duration; the end time follows from the two.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: SegmentKind,
        order: u32,
        location_name: impl Into<String>,
        position: GeoPoint,
        start_time: DateTime<Utc>,
        duration_hours: Decimal,
        note: impl Into<String>,
    ) -> Self {
        let end_time = start_time + hours_to_delta(duration_hours);
        Self {
            kind,
            order,
            location_name: location_name.into(),
            latitude: position.lat,
            longitude: position.lon,
            start_time,
            end_time,
            duration_hours,
            note: note.into(),
        }
    }
}

/// Convert decimal hours to a chrono duration, rounded to milliseconds.
///
/// # Panics
///
/// Panics if `hours` is negative or large enough to overflow `i64`
/// milliseconds — either is a programming error upstream, not an input
/// condition.
pub fn hours_to_delta(hours: Decimal) -> Duration {
    assert!(hours >= Decimal::ZERO, "negative duration: {hours} h");
    let millis = (hours * dec!(3_600_000))
        .round()
        .to_i64()
        .expect("segment duration overflows milliseconds");
    Duration::milliseconds(millis)
}
