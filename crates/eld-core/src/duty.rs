//! Segment kinds and the shared duty-status classification.
//!
//! The write side (segment generation in `eld-schedule`) and the read side
//! (timeline projection in `eld-app`) must bucket segments identically, so
//! the kind→status mapping lives here as one pure function rather than being
//! duplicated in both crates.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── SegmentKind ───────────────────────────────────────────────────────────────

/// The kind of one scheduled activity segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SegmentKind {
    Driving,
    RestBreak,
    SleeperBerth,
    Fuel,
    Pickup,
    Dropoff,
}

impl SegmentKind {
    /// Stable storage code, used as the DB column value.
    pub fn code(self) -> &'static str {
        match self {
            SegmentKind::Driving => "DRIVING",
            SegmentKind::RestBreak => "REST",
            SegmentKind::SleeperBerth => "SLEEPER",
            SegmentKind::Fuel => "FUEL",
            SegmentKind::Pickup => "PICKUP",
            SegmentKind::Dropoff => "DROPOFF",
        }
    }

    /// Inverse of [`SegmentKind::code`].
    pub fn from_code(code: &str) -> CoreResult<Self> {
        match code {
            "DRIVING" => Ok(SegmentKind::Driving),
            "REST" => Ok(SegmentKind::RestBreak),
            "SLEEPER" => Ok(SegmentKind::SleeperBerth),
            "FUEL" => Ok(SegmentKind::Fuel),
            "PICKUP" => Ok(SegmentKind::Pickup),
            "DROPOFF" => Ok(SegmentKind::Dropoff),
            other => Err(CoreError::UnknownSegmentKind(other.to_owned())),
        }
    }

    /// The regulatory duty status this segment is logged under.
    ///
    /// Driving is its own status; a sleeper-berth period is its own status;
    /// every other planned stop (break, fuel, pickup, dropoff) is time on
    /// duty but not driving.
    pub fn duty_status(self) -> DutyStatus {
        match self {
            SegmentKind::Driving => DutyStatus::Driving,
            SegmentKind::SleeperBerth => DutyStatus::SleeperBerth,
            SegmentKind::RestBreak
            | SegmentKind::Fuel
            | SegmentKind::Pickup
            | SegmentKind::Dropoff => DutyStatus::OnDuty,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ── DutyStatus ────────────────────────────────────────────────────────────────

/// The four-way duty-status classification used for regulatory logs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DutyStatus {
    Driving,
    OnDuty,
    SleeperBerth,
    OffDuty,
}

impl DutyStatus {
    /// `true` for the statuses that advance the cumulative duty-hours
    /// counter (driving and on-duty-not-driving).
    #[inline]
    pub fn counts_toward_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDuty)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::Driving => "DRIVING",
            DutyStatus::OnDuty => "ON_DUTY",
            DutyStatus::SleeperBerth => "SLEEPER_BERTH",
            DutyStatus::OffDuty => "OFF_DUTY",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
