//! `eld-schedule` — the hours-of-service scheduling core.
//!
//! Given a two-leg route (current → pickup → dropoff) and the driver's
//! already-used cycle hours, produce an ordered itinerary of activity
//! segments (driving, breaks, sleeper-berth rest, fueling, pickup/dropoff)
//! that satisfies four interacting time budgets plus a distance-based
//! refueling trigger, then fold it into per-calendar-day duty summaries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`rules`]     | `HosRules` regulatory constants + validation           |
//! | [`counters`]  | `DutyCounters`, `HosAction`, pure transition functions |
//! | [`segment`]   | `ActivitySegment`                                      |
//! | [`leg`]       | single-leg processor (state machine driver)            |
//! | [`planner`]   | `plan_trip`, `PlanRequest`, `TripPlan`                 |
//! | [`daily_log`] | `DailyLogSummary`, per-date aggregation                |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                   |
//!
//! # Decision model (summary)
//!
//! Before every driving chunk the counters are checked in fixed precedence:
//!
//! ```text
//! continuous ≥ 8 h           → 30-min break
//! on-duty ≥ 14 h ∨ driving ≥ 11 h → 10-h sleeper berth
//! miles since fuel ≥ 1000    → 30-min fuel stop
//! cycle ≥ 70 h               → CycleExhausted (terminal)
//! otherwise                  → drive min(budgets) at the assumed speed
//! ```
//!
//! Breaks and sleeper periods are life-safety requirements and preempt
//! fueling and driving; cycle exhaustion is terminal because no amount of
//! waiting within one run restores cycle hours.

pub mod counters;
pub mod daily_log;
pub mod error;
pub mod leg;
pub mod planner;
pub mod rules;
pub mod segment;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use counters::{DutyCounters, HosAction};
pub use daily_log::{DailyLogSummary, aggregate_daily_logs};
pub use error::{ScheduleError, ScheduleResult};
pub use leg::{LegEnd, LegState, process_leg};
pub use planner::{PlanRequest, TripPlan, Waypoint, next_day_start, plan_trip};
pub use rules::HosRules;
pub use segment::ActivitySegment;
