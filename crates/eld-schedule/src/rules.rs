//! Regulatory rule constants.
//!
//! Every limit is an explicit field with no `Default` impl: in a compliance
//! context a silently-defaulted cap is worse than a missing one.  Use
//! [`HosRules::fmcsa`] for the standard US property-carrying configuration,
//! or deserialize a rule file and run [`HosRules::validate`] on it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{ScheduleError, ScheduleResult};

/// The fixed hours-of-service limits consumed by the scheduler.
///
/// Durations are decimal hours, distances decimal miles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HosRules {
    /// Daily driving cap (11 h under FMCSA property rules).
    pub max_driving_hours_per_day: Decimal,
    /// Daily on-duty cap, driving included (14 h).
    pub max_on_duty_hours_per_day: Decimal,
    /// Length of a sleeper-berth rest that resets the daily windows (10 h).
    pub required_off_duty_hours: Decimal,
    /// Continuous driving allowed before a mandatory break (8 h).
    pub break_trigger_hours: Decimal,
    /// Length of the mandatory break (0.5 h).
    pub break_duration_hours: Decimal,
    /// Rolling multi-day on-duty budget (70 h).
    pub max_cycle_hours: Decimal,
    /// Days in the rolling cycle window (8).  Informational for log
    /// presentation; the scheduler treats the cycle budget as fixed within
    /// one run.
    pub cycle_window_days: u32,
    /// Distance between fuel stops (1000 mi).
    pub fueling_interval_miles: Decimal,
    /// Duration of a fuel stop (0.5 h).
    pub fueling_duration_hours: Decimal,
    /// Duration of the pickup and dropoff stops (1 h each).
    pub pickup_dropoff_duration_hours: Decimal,
    /// Assumed average road speed, mph (55).
    pub average_speed_mph: Decimal,
    /// Local hour at which a trip starts (7 → next 07:00).
    pub day_start_hour: u32,
}

impl HosRules {
    /// The standard FMCSA 70-hour/8-day property-carrying configuration.
    pub fn fmcsa() -> Self {
        Self {
            max_driving_hours_per_day: dec!(11),
            max_on_duty_hours_per_day: dec!(14),
            required_off_duty_hours: dec!(10),
            break_trigger_hours: dec!(8),
            break_duration_hours: dec!(0.5),
            max_cycle_hours: dec!(70),
            cycle_window_days: 8,
            fueling_interval_miles: dec!(1000),
            fueling_duration_hours: dec!(0.5),
            pickup_dropoff_duration_hours: dec!(1),
            average_speed_mph: dec!(55),
            day_start_hour: 7,
        }
    }

    /// Reject rule sets the scheduler cannot make progress under.
    pub fn validate(&self) -> ScheduleResult<()> {
        fn positive(name: &str, v: Decimal) -> ScheduleResult<()> {
            if v > Decimal::ZERO {
                Ok(())
            } else {
                Err(ScheduleError::InvalidRules(format!(
                    "{name} must be positive, got {v}"
                )))
            }
        }

        positive("max_driving_hours_per_day", self.max_driving_hours_per_day)?;
        positive("max_on_duty_hours_per_day", self.max_on_duty_hours_per_day)?;
        positive("required_off_duty_hours", self.required_off_duty_hours)?;
        positive("break_trigger_hours", self.break_trigger_hours)?;
        positive("break_duration_hours", self.break_duration_hours)?;
        positive("max_cycle_hours", self.max_cycle_hours)?;
        positive("fueling_interval_miles", self.fueling_interval_miles)?;
        positive("fueling_duration_hours", self.fueling_duration_hours)?;
        positive(
            "pickup_dropoff_duration_hours",
            self.pickup_dropoff_duration_hours,
        )?;
        positive("average_speed_mph", self.average_speed_mph)?;

        if self.cycle_window_days == 0 {
            return Err(ScheduleError::InvalidRules(
                "cycle_window_days must be at least 1".into(),
            ));
        }
        if self.day_start_hour >= 24 {
            return Err(ScheduleError::InvalidRules(format!(
                "day_start_hour must be 0–23, got {}",
                self.day_start_hour
            )));
        }
        if self.break_trigger_hours > self.max_driving_hours_per_day {
            return Err(ScheduleError::InvalidRules(
                "break_trigger_hours above the daily driving cap would never fire".into(),
            ));
        }

        Ok(())
    }
}
