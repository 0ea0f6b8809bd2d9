//! Strongly typed trip identifier.
//!
//! Trips are durable records shared with external systems, so the id is a
//! random UUID rather than a dense integer index.  The newtype keeps it from
//! being confused with other UUIDs at API boundaries.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::{CoreError, CoreResult};

/// Identifier of one persisted trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TripId(pub Uuid);

impl TripId {
    /// Mint a fresh random (v4) trip id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a trip id from its canonical hyphenated string form.
    pub fn parse(s: &str) -> CoreResult<Self> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for TripId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for TripId {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
