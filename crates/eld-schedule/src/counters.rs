//! Duty-hour counters and the pure decision/transition functions.
//!
//! The scheduling loop never mutates counters in place.  [`DutyCounters`]
//! is a small `Copy` value; [`DutyCounters::next_action`] decides what must
//! happen next under the fixed regulatory precedence, and one `after_*`
//! transition per action returns the successor state.  Each precedence
//! branch is therefore unit-testable on its own, without running a leg.
//!
//! # Invariant
//!
//! At the instant a `Drive` action is produced, every counter is strictly
//! below its cap — the precedence chain fires the mandated stop *at* the
//! cap, so caps are triggers and are never exceeded by a driving chunk.

use rust_decimal::Decimal;

use crate::rules::HosRules;
use crate::{ScheduleError, ScheduleResult};

// ── DutyCounters ──────────────────────────────────────────────────────────────

/// The running duty state threaded through a scheduling run.
///
/// Four duty-hour accumulators plus the distance-since-fuel accumulator.
/// All are decimal; regulatory arithmetic never touches binary floats.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DutyCounters {
    /// Hours driven since the last sleeper-berth rest.
    pub daily_driving_hours: Decimal,
    /// Hours on duty (driving or not) since the last sleeper-berth rest.
    pub daily_on_duty_hours: Decimal,
    /// Hours driven since the last break of any kind.
    pub continuous_driving_hours: Decimal,
    /// Hours consumed of the rolling multi-day cycle.  Never reset within
    /// a run.
    pub cycle_used_hours: Decimal,
    /// Miles driven since the last fuel stop.  Never reset by rest periods.
    pub miles_since_fuel: Decimal,
}

/// What the driver must do next, decided by [`DutyCounters::next_action`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HosAction {
    /// Mandatory 30-minute break (continuous-driving trigger).
    TakeBreak,
    /// Mandatory 10-hour sleeper-berth rest (daily cap trigger).
    SleeperRest,
    /// Fuel stop (distance trigger).
    Refuel,
    /// Drive the next chunk: `miles` at the assumed speed, taking `hours`.
    Drive { miles: Decimal, hours: Decimal },
}

impl DutyCounters {
    /// Counters at the start of a run: everything zero except the cycle
    /// hours the driver has already used.
    pub fn starting(cycle_used_hours: Decimal) -> Self {
        Self {
            daily_driving_hours: Decimal::ZERO,
            daily_on_duty_hours: Decimal::ZERO,
            continuous_driving_hours: Decimal::ZERO,
            cycle_used_hours,
            miles_since_fuel: Decimal::ZERO,
        }
    }

    // ── Decision ──────────────────────────────────────────────────────────

    /// Decide the next action for a leg with `remaining_miles` left.
    ///
    /// Precedence: break ≻ sleeper ≻ fuel ≻ cycle-stop ≻ drive.  Exactly
    /// one condition fires per call; the caller applies the matching
    /// transition and asks again.
    pub fn next_action(
        &self,
        rules: &HosRules,
        remaining_miles: Decimal,
    ) -> ScheduleResult<HosAction> {
        debug_assert!(
            remaining_miles > Decimal::ZERO,
            "next_action called with no distance left"
        );

        if self.continuous_driving_hours >= rules.break_trigger_hours {
            return Ok(HosAction::TakeBreak);
        }

        if self.daily_on_duty_hours >= rules.max_on_duty_hours_per_day
            || self.daily_driving_hours >= rules.max_driving_hours_per_day
        {
            return Ok(HosAction::SleeperRest);
        }

        if self.miles_since_fuel >= rules.fueling_interval_miles {
            return Ok(HosAction::Refuel);
        }

        if self.cycle_used_hours >= rules.max_cycle_hours {
            return Err(ScheduleError::CycleExhausted {
                used: self.cycle_used_hours,
                cap: rules.max_cycle_hours,
            });
        }

        // All budgets are strictly positive here (the triggers above would
        // have fired otherwise), so the chunk is always non-empty and the
        // leg loop always makes progress.
        let available_hours = (rules.max_driving_hours_per_day - self.daily_driving_hours)
            .min(rules.max_on_duty_hours_per_day - self.daily_on_duty_hours)
            .min(rules.break_trigger_hours - self.continuous_driving_hours)
            .min(rules.max_cycle_hours - self.cycle_used_hours);

        let miles = remaining_miles
            .min(available_hours * rules.average_speed_mph)
            .min(rules.fueling_interval_miles - self.miles_since_fuel);
        let hours = miles / rules.average_speed_mph;

        Ok(HosAction::Drive { miles, hours })
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// After the 30-minute break: break time counts as on-duty, the
    /// continuous-driving window restarts.
    pub fn after_break(self, rules: &HosRules) -> Self {
        Self {
            daily_on_duty_hours: self.daily_on_duty_hours + rules.break_duration_hours,
            continuous_driving_hours: Decimal::ZERO,
            ..self
        }
    }

    /// After the 10-hour sleeper rest: both daily windows and the
    /// continuous-driving window restart.  Cycle hours and fuel distance
    /// carry through — rest restores neither.
    pub fn after_sleeper(self) -> Self {
        Self {
            daily_driving_hours: Decimal::ZERO,
            daily_on_duty_hours: Decimal::ZERO,
            continuous_driving_hours: Decimal::ZERO,
            ..self
        }
    }

    /// After a fuel stop: fueling counts as on-duty, the fuel-distance
    /// accumulator restarts.
    pub fn after_fuel(self, rules: &HosRules) -> Self {
        Self {
            daily_on_duty_hours: self.daily_on_duty_hours + rules.fueling_duration_hours,
            miles_since_fuel: Decimal::ZERO,
            ..self
        }
    }

    /// After driving a chunk: every accumulator advances.
    ///
    /// # Panics
    ///
    /// Panics if `miles` or `hours` is negative — that is regulatory math
    /// gone wrong, and clamping it silently would be worse than crashing.
    pub fn after_drive(self, miles: Decimal, hours: Decimal) -> Self {
        assert!(
            miles >= Decimal::ZERO && hours >= Decimal::ZERO,
            "negative driving chunk: {miles} mi / {hours} h"
        );
        Self {
            daily_driving_hours: self.daily_driving_hours + hours,
            daily_on_duty_hours: self.daily_on_duty_hours + hours,
            continuous_driving_hours: self.continuous_driving_hours + hours,
            cycle_used_hours: self.cycle_used_hours + hours,
            miles_since_fuel: self.miles_since_fuel + miles,
        }
    }

    /// After a stationary work stop (pickup or dropoff): the time is
    /// on-duty-not-driving.
    pub fn after_work_stop(self, hours: Decimal) -> Self {
        Self {
            daily_on_duty_hours: self.daily_on_duty_hours + hours,
            ..self
        }
    }
}
