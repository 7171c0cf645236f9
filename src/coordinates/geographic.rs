//! Geographic (latitude, longitude) positions in degrees

use super::cartesian::Cartesian3;
use super::spherical::{positive_longitude, sph2cart};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the sphere, in degrees
///
/// Longitude is stored as given; [`GeographicPoint::approx_eq`] compares
/// modulo 360°. Latitude is expected in [-90°, 90°] but not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeographicPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeographicPoint { lat, lon }
    }

    /// Longitude wrapped into [0°, 360°)
    pub fn positive_longitude(&self) -> f64 {
        positive_longitude(self.lon)
    }

    /// Unit vector (or surface point, for `radius` ≠ 1) for this position
    pub fn to_cartesian(&self, radius: f64) -> Cartesian3 {
        sph2cart(self.lat, self.lon, radius)
    }

    /// Compare two positions within `tolerance` degrees
    ///
    /// Longitudes are compared on the circle, so 0° matches 360° and -90°
    /// matches 270°. At either geographic pole longitude carries no
    /// information and is ignored.
    pub fn approx_eq(&self, other: &GeographicPoint, tolerance: f64) -> bool {
        if (self.lat - other.lat).abs() > tolerance {
            return false;
        }
        if 90.0 - self.lat.abs() <= tolerance && 90.0 - other.lat.abs() <= tolerance {
            return true;
        }

        let diff = (self.positive_longitude() - other.positive_longitude()).abs();
        diff.min(360.0 - diff) <= tolerance
    }
}

impl From<(f64, f64)> for GeographicPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        GeographicPoint::new(lat, lon)
    }
}

impl fmt::Display for GeographicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}°, {:.6}°)", self.lat, self.lon)
    }
}
