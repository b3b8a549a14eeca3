//! Points on a sphere and the great-circle distance between them.
//!
//! All angles handled here are in radians. Input in decimal degrees goes
//! through [`Coordinate::from_degrees`], which converts before validating.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use crate::approx::{greater_or_equal, less_or_equal};
use crate::error::{InviteError, Result};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS: f64 = 6371.009;

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn is_valid_longitude(longitude: f64) -> bool {
    greater_or_equal(longitude, -PI) && less_or_equal(longitude, PI)
}

pub fn is_valid_latitude(latitude: f64) -> bool {
    greater_or_equal(latitude, -FRAC_PI_2) && less_or_equal(latitude, FRAC_PI_2)
}

/// A validated longitude/latitude pair in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        let coordinate = Self {
            longitude,
            latitude,
        };

        if !coordinate.is_valid() {
            return Err(InviteError::InvalidCoordinate {
                longitude,
                latitude,
            });
        }

        Ok(coordinate)
    }

    pub fn from_degrees(longitude: f64, latitude: f64) -> Result<Self> {
        Self::new(degrees_to_radians(longitude), degrees_to_radians(latitude))
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn is_valid(&self) -> bool {
        is_valid_longitude(self.longitude) && is_valid_latitude(self.latitude)
    }

    /// Great-circle distance to `other` on a sphere of the given radius.
    pub fn distance_to(&self, other: &Coordinate, radius: f64) -> f64 {
        distance(self, other, radius)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Longitude: {:.6}, Latitude: {:.6}}}",
            self.longitude, self.latitude
        )
    }
}

/// Spherical law of cosines. The result has the unit of `radius`.
pub fn distance(a: &Coordinate, b: &Coordinate, radius: f64) -> f64 {
    if a == b {
        return 0.0;
    }

    // sin^2 + cos^2 can round to just above 1.0, where acos is NaN
    let cos_angle = a.latitude.sin() * b.latitude.sin()
        + a.latitude.cos() * b.latitude.cos() * (a.longitude - b.longitude).abs().cos();
    let central_angle = cos_angle.clamp(-1.0, 1.0).acos();

    radius * central_angle
}
