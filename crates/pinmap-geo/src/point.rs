//! Geographic point and offset types

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::units::{DistanceUnit, EARTH_RADIUS_M};

/// Valid longitude range (degrees)
pub const MIN_LNG: f64 = -180.0;
pub const MAX_LNG: f64 = 180.0;

/// Valid latitude range (degrees)
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// A geographic coordinate in degrees (WGS-84 longitude/latitude)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    /// Create a new coordinate
    #[inline]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Check that both components are finite and in range
    pub fn validate(self) -> Result<Self, GeometryError> {
        let lng_ok = self.lng.is_finite() && (MIN_LNG..=MAX_LNG).contains(&self.lng);
        let lat_ok = self.lat.is_finite() && (MIN_LAT..=MAX_LAT).contains(&self.lat);
        if lng_ok && lat_ok {
            Ok(self)
        } else {
            Err(GeometryError::InvalidCoordinate {
                lng: self.lng,
                lat: self.lat,
            })
        }
    }

    /// Great-circle (haversine) distance to another point, in `unit`
    pub fn distance_to(self, other: LngLat, unit: DistanceUnit) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        unit.from_meters(EARTH_RADIUS_M * c)
    }

    /// Position as a GeoJSON `[lng, lat]` pair
    #[inline]
    pub fn to_position(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// Offset between two geographic points, in degrees
///
/// Held by the drag state machine for the duration of a gesture: the
/// vector from the current region center to the initial contact point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LngLatDelta {
    pub d_lng: f64,
    pub d_lat: f64,
}

impl LngLatDelta {
    /// Zero offset
    pub const ZERO: LngLatDelta = LngLatDelta { d_lng: 0.0, d_lat: 0.0 };

    /// Create a new offset
    #[inline]
    pub const fn new(d_lng: f64, d_lat: f64) -> Self {
        Self { d_lng, d_lat }
    }
}

impl std::ops::Sub for LngLat {
    type Output = LngLatDelta;
    #[inline]
    fn sub(self, other: LngLat) -> LngLatDelta {
        LngLatDelta::new(self.lng - other.lng, self.lat - other.lat)
    }
}

impl std::ops::Sub<LngLatDelta> for LngLat {
    type Output = LngLat;
    #[inline]
    fn sub(self, offset: LngLatDelta) -> LngLat {
        LngLat::new(self.lng - offset.d_lng, self.lat - offset.d_lat)
    }
}

impl std::ops::Add<LngLatDelta> for LngLat {
    type Output = LngLat;
    #[inline]
    fn add(self, offset: LngLatDelta) -> LngLat {
        LngLat::new(self.lng + offset.d_lng, self.lat + offset.d_lat)
    }
}

impl std::ops::Neg for LngLatDelta {
    type Output = LngLatDelta;
    #[inline]
    fn neg(self) -> LngLatDelta {
        LngLatDelta::new(-self.d_lng, -self.d_lat)
    }
}
