//! Geometry error types

use std::fmt;

/// Errors raised while constructing region geometry
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// Radius was zero, negative, or not finite
    InvalidRadius(f64),
    /// Longitude or latitude outside the valid range, or not finite
    InvalidCoordinate { lng: f64, lat: f64 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidRadius(r) => {
                write!(f, "invalid radius: {} (must be finite and > 0)", r)
            }
            GeometryError::InvalidCoordinate { lng, lat } => {
                write!(f, "invalid coordinate: ({}, {})", lng, lat)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
