//! Trip scheduler: orchestrates both legs of a trip over shared counters.
//!
//! Two provider calls (current→pickup, pickup→dropoff), two leg runs with
//! the duty counters threaded through continuously — only the pickup work
//! stop separates the legs, nothing resets — then totals, path
//! concatenation, and the daily-log fold.

use chrono::{DateTime, Duration, Timelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use eld_core::{GeoPoint, SegmentKind};
use eld_route::RouteProvider;

use crate::counters::DutyCounters;
use crate::daily_log::{DailyLogSummary, aggregate_daily_logs};
use crate::leg::{LegEnd, LegState, process_leg};
use crate::rules::HosRules;
use crate::segment::ActivitySegment;
use crate::{ScheduleError, ScheduleResult};

// ── Request / result types ────────────────────────────────────────────────────

/// A named coordinate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub point: GeoPoint,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, point: GeoPoint) -> Self {
        Self { name: name.into(), point }
    }
}

/// Everything one scheduling run needs from the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub current: Waypoint,
    pub pickup: Waypoint,
    pub dropoff: Waypoint,
    /// Cycle hours the driver has already used in the rolling window.
    pub cycle_used_hours: Decimal,
}

/// The aggregate result of one scheduling run.
///
/// Produced once per invocation and handed to the persistence layer; the
/// scheduler retains no reference to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub total_distance_miles: Decimal,
    /// Sum of all driving-segment durations across both legs.
    pub total_driving_hours: Decimal,
    pub segments: Vec<ActivitySegment>,
    pub daily_logs: Vec<DailyLogSummary>,
    /// Combined path geometry, leg 1 followed by leg 2.
    pub path: Vec<GeoPoint>,
}

// ── Start-time rule ───────────────────────────────────────────────────────────

/// The next occurrence of `day_start_hour:00` strictly in the future of
/// `now`'s hour: if `now` is already at or past that hour, the trip starts
/// the following calendar day.
pub fn next_day_start(now: DateTime<Utc>, day_start_hour: u32) -> DateTime<Utc> {
    let start = now
        .date_naive()
        .and_hms_opt(day_start_hour, 0, 0)
        .expect("day_start_hour validated to be 0–23")
        .and_utc();
    if now.hour() >= day_start_hour {
        start + Duration::days(1)
    } else {
        start
    }
}

// ── plan_trip ─────────────────────────────────────────────────────────────────

/// Schedule a full trip.
///
/// Validates the rules and the cycle budget up front — a driver with no
/// cycle hours left fails with [`ScheduleError::CycleExhausted`] before the
/// provider is called at all, so no routing quota is wasted on a plan that
/// cannot exist.
pub fn plan_trip(
    provider: &dyn RouteProvider,
    rules: &HosRules,
    request: &PlanRequest,
    now: DateTime<Utc>,
) -> ScheduleResult<TripPlan> {
    rules.validate()?;

    let available_cycle = rules.max_cycle_hours - request.cycle_used_hours;
    if available_cycle <= Decimal::ZERO {
        return Err(ScheduleError::CycleExhausted {
            used: request.cycle_used_hours,
            cap: rules.max_cycle_hours,
        });
    }

    let leg1 = provider.route(request.current.point, request.pickup.point)?;
    let leg2 = provider.route(request.pickup.point, request.dropoff.point)?;
    log::debug!(
        "routed legs: {} mi to pickup, {} mi to dropoff",
        leg1.distance_miles,
        leg2.distance_miles
    );

    let start = next_day_start(now, rules.day_start_hour);
    let mut segments = Vec::new();

    let state = LegState {
        counters: DutyCounters::starting(request.cycle_used_hours),
        cursor: start,
        next_order: 0,
    };

    let state = process_leg(
        rules,
        state,
        &leg1,
        request.current.point,
        &LegEnd {
            kind: SegmentKind::Pickup,
            name: request.pickup.name.clone(),
            point: request.pickup.point,
        },
        &mut segments,
    )?;

    process_leg(
        rules,
        state,
        &leg2,
        request.pickup.point,
        &LegEnd {
            kind: SegmentKind::Dropoff,
            name: request.dropoff.name.clone(),
            point: request.dropoff.point,
        },
        &mut segments,
    )?;

    let total_driving_hours = segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Driving)
        .map(|s| s.duration_hours)
        .sum();

    let daily_logs = aggregate_daily_logs(&segments);

    let mut path = leg1.path;
    path.extend_from_slice(&leg2.path);

    log::info!(
        "planned trip: {} segments over {} calendar days, {} driving hours",
        segments.len(),
        daily_logs.len(),
        total_driving_hours
    );

    Ok(TripPlan {
        total_distance_miles: leg1.distance_miles + leg2.distance_miles,
        total_driving_hours,
        segments,
        daily_logs,
        path,
    })
}
