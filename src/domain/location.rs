//! The [`Location`] value object: a point on or above the Earth.

use crate::domain::value_object::ValueObject;
use crate::utils::error::{LocationError, Result};
use crate::utils::validation::{validate_finite, validate_range};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive latitude bounds in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Inclusive longitude bounds in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A geographic coordinate with altitude.
///
/// The only way to obtain a `Location` is [`Location::new`] (or one of the
/// conversions built on it), so every instance has latitude within
/// [`LATITUDE_RANGE`] and longitude within [`LONGITUDE_RANGE`]. Fields are
/// private and there are no setters; to move a point, build a new one.
///
/// Altitude has no range, but must be finite so every instance survives a
/// JSON round trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl Location {
    /// Validates and builds a location.
    ///
    /// Checks run latitude, longitude, then altitude; the first failing field
    /// is reported. Values are never clamped.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self> {
        let checked = validate_range("latitude", latitude, LATITUDE_RANGE.0, LATITUDE_RANGE.1)
            .and_then(|_| {
                validate_range(
                    "longitude",
                    longitude,
                    LONGITUDE_RANGE.0,
                    LONGITUDE_RANGE.1,
                )
            })
            .and_then(|_| validate_finite("altitude", altitude));

        if let Err(e) = checked {
            tracing::debug!("Rejected location ({}, {}, {}): {}", latitude, longitude, altitude, e);
            return Err(e);
        }

        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }
}

impl ValueObject for Location {}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.latitude, self.longitude, self.altitude)
    }
}

impl FromStr for Location {
    type Err = LocationError;

    /// Parses `"latitude,longitude,altitude"`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(LocationError::Parse {
                input: s.to_string(),
                reason: format!("expected 3 comma-separated values, found {}", parts.len()),
            });
        }

        let mut values = [0.0_f64; 3];
        for (slot, (part, name)) in values
            .iter_mut()
            .zip(parts.iter().zip(["latitude", "longitude", "altitude"]))
        {
            *slot = part.parse().map_err(|e| LocationError::Parse {
                input: s.to_string(),
                reason: format!("{} '{}' is not a number: {}", name, part, e),
            })?;
        }

        Location::new(values[0], values[1], values[2])
    }
}

/// Unchecked wire shape; only reachable through `TryFrom`.
#[derive(Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl TryFrom<RawLocation> for Location {
    type Error = LocationError;

    fn try_from(raw: RawLocation) -> Result<Self> {
        Location::new(raw.latitude, raw.longitude, raw.altitude)
    }
}
