//! Duty-status timeline projection.
//!
//! Flattens a trip's stored segments into the chronological view a log
//! display renders: one entry per segment with its duty status, a short
//! activity description, and the running duty-hours total.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use eld_core::{DutyStatus, SegmentKind};
use eld_schedule::ActivitySegment;

/// One row of the timeline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub time: DateTime<Utc>,
    pub status: DutyStatus,
    pub activity: String,
    pub duration_hours: Decimal,
    /// Running total of duty hours (driving + on-duty-not-driving) up to and
    /// including this entry.  Sleeper-berth entries carry the total forward
    /// without advancing it.
    pub cumulative_duty_hours: Decimal,
}

/// Project segments into timeline entries.
///
/// Durations are recomputed from the stored timestamps so the timeline is
/// internally consistent even if the decimal duration and the
/// millisecond-rounded timestamps disagree in the last digit.  Assumes the
/// segments are already in `order` sequence, which is how the store returns
/// them.
pub fn build_timeline(segments: &[ActivitySegment]) -> Vec<TimelineEntry> {
    let mut cumulative = Decimal::ZERO;
    segments
        .iter()
        .map(|segment| {
            let status = segment.kind.duty_status();
            let millis = (segment.end_time - segment.start_time).num_milliseconds();
            let duration_hours = Decimal::from(millis) / dec!(3_600_000);
            if status.counts_toward_duty() {
                cumulative += duration_hours;
            }
            TimelineEntry {
                time: segment.start_time,
                status,
                activity: describe(segment),
                duration_hours,
                cumulative_duty_hours: cumulative,
            }
        })
        .collect()
}

fn describe(segment: &ActivitySegment) -> String {
    let name = &segment.location_name;
    match segment.kind {
        SegmentKind::Driving => format!("Driving - {name}"),
        SegmentKind::RestBreak => format!("Rest Break - {name}"),
        SegmentKind::SleeperBerth => format!("Sleeper Berth - {name}"),
        SegmentKind::Fuel => format!("Fueling at {name}"),
        SegmentKind::Pickup => format!("Pickup at {name}"),
        SegmentKind::Dropoff => format!("Dropoff at {name}"),
    }
}
