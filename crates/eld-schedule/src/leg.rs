//! Single-leg processor: the driver of the duty-counter state machine.
//!
//! Converts one leg's total distance into a run of segments by repeatedly
//! asking [`DutyCounters::next_action`] what must happen next, emitting the
//! matching segment, and threading the returned counters, clock cursor, and
//! sequence order forward.  Ends with exactly one pickup or dropoff work
//! stop.
//!
//! Intermediate stops (breaks, sleeper rests, fuel) are pinned to the leg
//! origin's coordinates — stop *placement* along the path is a non-goal;
//! only the timing is load-bearing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use eld_core::{GeoPoint, SegmentKind};
use eld_route::RouteLeg;

use crate::counters::{DutyCounters, HosAction};
use crate::rules::HosRules;
use crate::segment::ActivitySegment;
use crate::ScheduleResult;

// ── Leg inputs/outputs ────────────────────────────────────────────────────────

/// The scheduling state threaded through both legs of a trip.
#[derive(Copy, Clone, Debug)]
pub struct LegState {
    pub counters: DutyCounters,
    /// The clock cursor: start time of the next segment to be emitted.
    pub cursor: DateTime<Utc>,
    /// Next free sequence index.
    pub next_order: u32,
}

/// The work stop that terminates a leg.
#[derive(Clone, Debug)]
pub struct LegEnd {
    /// `Pickup` or `Dropoff`.
    pub kind: SegmentKind,
    pub name: String,
    pub point: GeoPoint,
}

// ── Leg processor ─────────────────────────────────────────────────────────────

/// Process one leg, appending its segments to `out` and returning the
/// updated state for the following leg.
///
/// Fails with [`crate::ScheduleError::CycleExhausted`] if the cycle cap is hit
/// mid-leg; no segments emitted so far are retracted — the caller discards
/// the whole run (no partial plan ever leaves the trip scheduler).
pub fn process_leg(
    rules: &HosRules,
    mut state: LegState,
    leg: &RouteLeg,
    origin: GeoPoint,
    end: &LegEnd,
    out: &mut Vec<ActivitySegment>,
) -> ScheduleResult<LegState> {
    debug_assert!(
        matches!(end.kind, SegmentKind::Pickup | SegmentKind::Dropoff),
        "leg must end in a pickup or dropoff, got {}",
        end.kind
    );
    if leg.distance_miles < Decimal::ZERO {
        // Negative distance from a provider is corrupt data, not a schedule.
        panic!("negative leg distance: {} mi", leg.distance_miles);
    }

    let mut remaining = leg.distance_miles;

    while remaining > Decimal::ZERO {
        match state.counters.next_action(rules, remaining)? {
            HosAction::TakeBreak => {
                log::debug!("order {}: mandatory break", state.next_order);
                emit(
                    &mut state,
                    out,
                    SegmentKind::RestBreak,
                    "Rest Area (30-min break)",
                    origin,
                    rules.break_duration_hours,
                    format!(
                        "Mandatory 30-minute break after {} hours driving",
                        rules.break_trigger_hours
                    ),
                );
                state.counters = state.counters.after_break(rules);
            }

            HosAction::SleeperRest => {
                log::debug!("order {}: sleeper-berth rest", state.next_order);
                emit(
                    &mut state,
                    out,
                    SegmentKind::SleeperBerth,
                    "Sleeper Berth/Rest Stop",
                    origin,
                    rules.required_off_duty_hours,
                    format!("{}-hour off-duty rest period", rules.required_off_duty_hours),
                );
                state.counters = state.counters.after_sleeper();
            }

            HosAction::Refuel => {
                log::debug!("order {}: fuel stop", state.next_order);
                emit(
                    &mut state,
                    out,
                    SegmentKind::Fuel,
                    "Fuel Stop",
                    origin,
                    rules.fueling_duration_hours,
                    "Fueling stop",
                );
                state.counters = state.counters.after_fuel(rules);
            }

            HosAction::Drive { miles, hours } => {
                emit(
                    &mut state,
                    out,
                    SegmentKind::Driving,
                    format!("Driving segment ({:.1} miles)", miles),
                    origin,
                    hours,
                    format!("Driving {:.1} miles", miles),
                );
                state.counters = state.counters.after_drive(miles, hours);
                remaining -= miles;
            }
        }
    }

    // The leg always terminates in its work stop, even for a zero-length leg.
    let title = if end.kind == SegmentKind::Pickup { "Pickup" } else { "Dropoff" };
    emit(
        &mut state,
        out,
        end.kind,
        end.name.clone(),
        end.point,
        rules.pickup_dropoff_duration_hours,
        format!(
            "{title} location - {} hour stop",
            rules.pickup_dropoff_duration_hours
        ),
    );
    state.counters = state
        .counters
        .after_work_stop(rules.pickup_dropoff_duration_hours);

    Ok(state)
}

/// Append one segment and advance the cursor and order counter.
fn emit(
    state: &mut LegState,
    out: &mut Vec<ActivitySegment>,
    kind: SegmentKind,
    name: impl Into<String>,
    position: GeoPoint,
    duration_hours: Decimal,
    note: impl Into<String>,
) {
    let segment = ActivitySegment::new(
        kind,
        state.next_order,
        name,
        position,
        state.cursor,
        duration_hours,
        note,
    );
    state.cursor = segment.end_time;
    state.next_order += 1;
    out.push(segment);
}
