//! Distance units for radius and distance values

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Meters per statute mile
const METERS_PER_MILE: f64 = 1_609.344;

/// Meters per kilometer
const METERS_PER_KM: f64 = 1_000.0;

/// Unit a radius or distance is expressed in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Statute miles (the dashboard default)
    #[default]
    Miles,
    Kilometers,
    Meters,
}

impl DistanceUnit {
    /// Convert a value in this unit to meters
    #[inline]
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Miles => value * METERS_PER_MILE,
            DistanceUnit::Kilometers => value * METERS_PER_KM,
            DistanceUnit::Meters => value,
        }
    }

    /// Convert a value in meters to this unit
    #[inline]
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Miles => meters / METERS_PER_MILE,
            DistanceUnit::Kilometers => meters / METERS_PER_KM,
            DistanceUnit::Meters => meters,
        }
    }

    /// Central angle (radians) subtended by a distance in this unit
    #[inline]
    pub fn to_central_angle(self, value: f64) -> f64 {
        self.to_meters(value) / EARTH_RADIUS_M
    }
}
