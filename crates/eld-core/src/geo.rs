//! Geographic coordinate type and coordinate-string parsing.
//!
//! `GeoPoint` uses `f64` latitude/longitude: trip endpoints are user input
//! and persisted verbatim, so full double precision is kept (unlike duty-hour
//! arithmetic, which is decimal — see `eld-schedule`).

use crate::{CoreError, CoreResult};

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse a `"LAT,LON"` coordinate string.
    ///
    /// Rejects anything that is not exactly two comma-separated decimal
    /// numbers within the valid WGS-84 range.  This is the validation gate
    /// for user-supplied coordinates; it runs before any routing call.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(CoreError::InvalidCoordinate(format!(
                "expected \"LAT,LON\", got {s:?}"
            )));
        }

        let lat: f64 = parts[0]
            .parse()
            .map_err(|_| CoreError::InvalidCoordinate(format!("latitude {:?}", parts[0])))?;
        let lon: f64 = parts[1]
            .parse()
            .map_err(|_| CoreError::InvalidCoordinate(format!("longitude {:?}", parts[1])))?;

        if !lat.is_finite() || lat.abs() > 90.0 {
            return Err(CoreError::InvalidCoordinate(format!(
                "latitude {lat} out of range"
            )));
        }
        if !lon.is_finite() || lon.abs() > 180.0 {
            return Err(CoreError::InvalidCoordinate(format!(
                "longitude {lon} out of range"
            )));
        }

        Ok(Self { lat, lon })
    }

    /// Haversine great-circle distance in statute miles.
    ///
    /// Accuracy is more than sufficient for a road-distance estimate that is
    /// then multiplied by a circuity factor (see `eld-route`).
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        const R_MILES: f64 = 3_958.8; // mean Earth radius

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R_MILES * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
