//! Local topocentric (east, north, down) components and azimuths

use crate::constants::{DEG2RAD, DEG360, RAD2DEG};
use serde::{Deserialize, Serialize};

/// A vector expressed in the local east/north/down frame at a surface point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalVector {
    pub east: f64,
    pub north: f64,
    /// Positive toward the earth's centre
    pub down: f64,
}

impl LocalVector {
    pub fn new(east: f64, north: f64, down: f64) -> Self {
        LocalVector { east, north, down }
    }

    /// Full length, including the vertical component
    pub fn magnitude(&self) -> f64 {
        self.horizontal_magnitude().hypot(self.down)
    }

    /// Length of the horizontal (east, north) part
    pub fn horizontal_magnitude(&self) -> f64 {
        self.east.hypot(self.north)
    }

    /// Direction of the horizontal part, clockwise from north; see [`azimuth`]
    pub fn azimuth(&self) -> f64 {
        azimuth(self.east, self.north)
    }
}

/// Project a geocentric vector `(x, y, z)` onto the local frame at `(lat, lon)`
///
/// ```text
/// east  = -sin(lon)·x + cos(lon)·y
/// north = -sin(lat)·cos(lon)·x - sin(lat)·sin(lon)·y + cos(lat)·z
/// down  = -cos(lat)·cos(lon)·x - cos(lat)·sin(lon)·y - sin(lat)·z
/// ```
///
/// Older implementations of this projection dropped the `·y` factor from the
/// middle term of `down`, which leaks a constant `-cos(lat)·sin(lon)` into
/// every vertical component. The formula above is the full rotation; a
/// velocity tangent to the sphere therefore projects to `down == 0`.
///
/// ```rust
/// use euler_pole::local_coords;
///
/// // +y at (0°, 0°) points due east
/// let v = local_coords(0.0, 0.0, 0.0, 1.0, 0.0);
/// assert_eq!((v.east, v.north, v.down), (1.0, 0.0, 0.0));
/// ```
pub fn local_coords(lat: f64, lon: f64, x: f64, y: f64, z: f64) -> LocalVector {
    let (sin_lat, cos_lat) = (lat * DEG2RAD).sin_cos();
    let (sin_lon, cos_lon) = (lon * DEG2RAD).sin_cos();

    let east = -sin_lon * x + cos_lon * y;
    let north = -sin_lat * cos_lon * x - sin_lat * sin_lon * y + cos_lat * z;
    let down = -cos_lat * cos_lon * x - cos_lat * sin_lon * y - sin_lat * z;

    LocalVector { east, north, down }
}

/// Azimuth in degrees clockwise from north, in (0°, 360°]
///
/// Computed as `90 - atan2(north, east)`; results at or below zero are
/// shifted up by 360°, so due north reports 360° rather than 0°. A zero
/// vector has no direction and reports 90° (`atan2(0, 0) == 0`).
///
/// ```rust
/// use euler_pole::azimuth;
///
/// assert_eq!(azimuth(1.0, 0.0), 90.0);
/// assert_eq!(azimuth(0.0, 1.0), 360.0);
/// assert_eq!(azimuth(0.0, 0.0), 90.0);
/// ```
pub fn azimuth(east: f64, north: f64) -> f64 {
    let azi = 90.0 - north.atan2(east) * RAD2DEG;
    if azi <= 0.0 {
        azi + DEG360
    } else {
        azi
    }
}
