//! Per-calendar-day duty summaries.
//!
//! A pure fold over the ordered segment list: each segment is bucketed by
//! the calendar date of its **start** timestamp.  A segment that straddles
//! midnight is attributed wholly to its start date — a strict midnight
//! split is a known alternative, deliberately not implemented (see
//! DESIGN.md).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use eld_core::DutyStatus;

use crate::segment::ActivitySegment;

/// One day's duty totals.
///
/// The four buckets need not sum to 24 h (the itinerary may not cover a
/// full day), and sleeper-berth time is counted in *two* buckets — sleeper
/// berth is off-duty for log purposes — so this is not a partition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyLogSummary {
    pub log_date: NaiveDate,
    pub driving_hours: Decimal,
    pub sleeper_berth_hours: Decimal,
    pub off_duty_hours: Decimal,
    pub on_duty_not_driving_hours: Decimal,
    /// Contributing segments' notes, joined with `"; "` in segment order.
    pub notes: String,
}

impl DailyLogSummary {
    fn empty(log_date: NaiveDate) -> Self {
        Self {
            log_date,
            driving_hours: Decimal::ZERO,
            sleeper_berth_hours: Decimal::ZERO,
            off_duty_hours: Decimal::ZERO,
            on_duty_not_driving_hours: Decimal::ZERO,
            notes: String::new(),
        }
    }
}

/// Fold the ordered segment list into one summary per calendar date,
/// returned in date order.
///
/// Deterministic and idempotent: the same segments always produce the same
/// summaries.  Segment timestamps are monotone, so date order equals
/// first-seen order.
pub fn aggregate_daily_logs(segments: &[ActivitySegment]) -> Vec<DailyLogSummary> {
    let mut days: BTreeMap<NaiveDate, (DailyLogSummary, Vec<&str>)> = BTreeMap::new();

    for segment in segments {
        let date = segment.start_time.date_naive();
        let (log, notes) = days
            .entry(date)
            .or_insert_with(|| (DailyLogSummary::empty(date), Vec::new()));

        let hours = segment.duration_hours;
        match segment.kind.duty_status() {
            DutyStatus::Driving => log.driving_hours += hours,
            DutyStatus::SleeperBerth => {
                // Counted as both sleeper-berth and off-duty time.
                log.sleeper_berth_hours += hours;
                log.off_duty_hours += hours;
            }
            DutyStatus::OnDuty => log.on_duty_not_driving_hours += hours,
            DutyStatus::OffDuty => log.off_duty_hours += hours,
        }

        if !segment.note.is_empty() {
            notes.push(&segment.note);
        }
    }

    days.into_values()
        .map(|(mut log, notes)| {
            log.notes = notes.join("; ");
            log
        })
        .collect()
}
