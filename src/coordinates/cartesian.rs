//! # Geocentric Cartesian Coordinates
//!
//! `Cartesian3` is the plain coordinate triple returned by [`sph2cart`]. Vector
//! algebra (cross products, frame changes) goes through `nalgebra::Vector3`
//! via [`Cartesian3::to_vector3`].
//!
//! ## Axis Convention
//!
//! - **X-axis**: Equator at the prime meridian (lat = 0°, lon = 0°)
//! - **Y-axis**: Equator at lon = 90°E
//! - **Z-axis**: Along the earth's spin axis toward the north pole
//!
//! ## Interpretation
//!
//! The same type carries unit directions, surface points (magnitude equal to
//! the earth radius), angular velocities and linear velocities. Which one a
//! value is depends on where it came from; the type does not normalize.
//!
//! ```rust
//! use euler_pole::coordinates::cartesian::Cartesian3;
//!
//! let prime_meridian = Cartesian3::new(1.0, 0.0, 0.0).to_vector3();
//! let spin_axis = Cartesian3::new(0.0, 0.0, 1.0).to_vector3();
//! assert_eq!(prime_meridian.dot(&spin_axis), 0.0);
//! ```

use super::spherical::{cart2sph, sph2cart};
use crate::Result;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Three-dimensional geocentric Cartesian vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component (toward lat = 0°, lon = 0°)
    pub x: f64,
    /// Y-component (toward lat = 0°, lon = 90°)
    pub y: f64,
    /// Z-component (toward the north pole)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Creates a vector from a geographic position in degrees
    ///
    /// Equivalent to [`sph2cart`]; `radius` becomes the vector's magnitude.
    ///
    /// ```rust
    /// use euler_pole::coordinates::cartesian::Cartesian3;
    ///
    /// let north_pole = Cartesian3::from_geographic(90.0, 0.0, 1.0);
    /// assert!(north_pole.x.abs() < 1e-15);
    /// assert!((north_pole.z - 1.0).abs() < 1e-15);
    /// ```
    pub fn from_geographic(lat: f64, lon: f64, radius: f64) -> Self {
        sph2cart(lat, lon, radius)
    }

    /// Converts to `(lat°, lon°, radius)`
    ///
    /// Fails for the zero vector, see [`cart2sph`].
    pub fn to_geographic(&self) -> Result<(f64, f64, f64)> {
        cart2sph(self.x, self.y, self.z)
    }

    /// Euclidean length of the vector
    ///
    /// Evaluated as a `hypot` chain, so components near the ends of the `f64`
    /// range neither overflow nor underflow when squared.
    ///
    /// ```rust
    /// use euler_pole::coordinates::cartesian::Cartesian3;
    ///
    /// assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// assert_eq!(Cartesian3::new(1e200, 0.0, 0.0).magnitude(), 1e200);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Converts to nalgebra Vector3 for matrix products
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian3::from_vector3(vec)
    }
}

impl From<Cartesian3> for Vector3<f64> {
    fn from(cart: Cartesian3) -> Self {
        cart.to_vector3()
    }
}
